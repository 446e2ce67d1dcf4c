use super::*;
use crate::document::CallSite;
use pretty_assertions::assert_eq;

#[test]
fn test_substring_search() {
    let catalog = Catalog::intrinsics().unwrap();
    let names: Vec<String> = workspace_symbols(&catalog, "BARRIER")
        .into_iter()
        .map(|symbol| symbol.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "AllMemoryBarrier",
            "AllMemoryBarrierWithGroupSync",
            "DeviceMemoryBarrier",
            "DeviceMemoryBarrierWithGroupSync",
            "GroupMemoryBarrier",
            "GroupMemoryBarrierWithGroupSync",
        ]
    );
}

#[test]
fn test_symbol_detail() {
    let catalog = Catalog::intrinsics().unwrap();
    let symbols = workspace_symbols(&catalog, "abort");
    assert_eq!(
        symbols,
        vec![SymbolInformation {
            name: "abort".to_string(),
            kind: SymbolKind::Function,
            detail: "1 overload".to_string(),
        }]
    );

    let details: Vec<(String, String)> = workspace_symbols(&catalog, "max")
        .into_iter()
        .map(|symbol| (symbol.name, symbol.detail))
        .collect();
    assert_eq!(
        details,
        vec![
            ("InterlockedMax".to_string(), "4 overloads".to_string()),
            ("max".to_string(), "8 overloads".to_string()),
            ("Process2DQuadTessFactorsMax".to_string(), "1 overload".to_string()),
            ("ProcessQuadTessFactorsMax".to_string(), "1 overload".to_string()),
            ("ProcessTriTessFactorsMax".to_string(), "1 overload".to_string()),
        ]
    );
}

#[test]
fn test_highlights_same_function() {
    let document = DocumentSnapshot::new(
        "file:///b.hlsl",
        3,
        vec![
            CallSite::new("dot", Span::new(0, 9), Vec::new()),
            CallSite::new("abs", Span::new(12, 18), Vec::new()),
            CallSite::new("dot", Span::new(20, 29), Vec::new()),
        ],
    );
    assert_eq!(
        document_highlights(&document, 22),
        vec![Span::new(0, 9), Span::new(20, 29)]
    );
    assert_eq!(document_highlights(&document, 10), Vec::new());
}
