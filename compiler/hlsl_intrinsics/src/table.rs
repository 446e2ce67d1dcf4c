//! The intrinsic function table.
//!
//! Entries follow the shader-model reference in declaration order; that order
//! is the order completion and signature help list them in.

use hlsl_types::{
    Type, TypeFamily, ALL_BOOL_TYPES, ALL_DOUBLE_TYPES, ALL_FLOAT_MATRIX_TYPES, ALL_FLOAT_TYPES,
    ALL_FLOAT_VECTOR_TYPES, ALL_INT_MATRIX_TYPES, ALL_INT_TYPES, ALL_INT_VECTOR_TYPES,
    ALL_NUMERIC_TYPES, ALL_UINT_VECTOR_TYPES,
};

use crate::overload::{Direction::Out, Overload, ParameterSignature};
use crate::template::Template;
use crate::{CatalogBuilder, CatalogError};

const SPECIFIED_VALUE: &str = "The specified value.";
const INPUT_VALUE: &str = "The input value.";
const IN_RADIANS: &str = "The specified value, in radians.";

const DEST: &str = "The destination address.";
const ORIGINAL_INPUT_VALUE: &str = "The original input value.";

const MUL_DOC: &str =
    "Multiplies x and y using matrix math. The inner dimension x-columns and y-rows must be equal.";
const MUL_X: &str = "The x input value. If x is a vector, it treated as a row vector.";
const MUL_Y: &str = "The y input value. If y is a vector, it treated as a column vector.";

const QUAD_TESS_DOC: &str = "Generates the corrected tessellation factors for a quad patch.";
const TRI_TESS_DOC: &str = "Generates the corrected tessellation factors for a tri patch.";
const RAW_EDGE_FACTORS: &str = "The edge tessellation factors, passed into the tessellator stage.";
const INSIDE_SCALE: &str = "The scale factor applied to the UV tessellation factors computed by the tessellation stage. The allowable range for insideScale is 0.0 to 1.0.";
const ROUNDED_EDGE: &str =
    "The rounded edge-tessellation factors calculated by the tessellator stage.";
const ROUNDED_INSIDE: &str =
    "The rounded tessellation factors calculated by the tessellator stage for inside edges.";
const UNROUNDED_INSIDE: &str =
    "The tessellation factors calculated by the tessellator stage for inside edges.";

/// `float | int` scalar and vector types.
fn float_or_int() -> TypeFamily {
    ALL_FLOAT_TYPES.union(&ALL_INT_TYPES)
}

/// The two atomic operand types.
fn int_or_uint() -> TypeFamily {
    TypeFamily::single(Type::INT).with(Type::UINT)
}

/// Register every intrinsic in table order.
pub(crate) fn register(b: &mut CatalogBuilder) -> Result<(), CatalogError> {
    b.expand(&Template::nullary(
        "abort",
        "Submits an error message to the information queue and terminates the current draw or dispatch call being executed.",
        Type::VOID,
    ))?;

    b.expand(
        &Template::new(
            "abs",
            "Returns the absolute value of the specified value.",
            ALL_NUMERIC_TYPES,
        )
        .param("value", "The specified value"),
    )?;

    b.expand(
        &Template::new(
            "acos",
            "Returns the arccosine of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param(
            "value",
            "The specified value. Each component should be a floating-point value within the range of -1 to 1.",
        ),
    )?;

    b.expand(
        &Template::new(
            "all",
            "Determines if all components of the specified value are non-zero.",
            ALL_NUMERIC_TYPES,
        )
        .param("value", "The specified value")
        .returns(Type::BOOL),
    )?;

    b.expand(&Template::nullary(
        "AllMemoryBarrier",
        "Blocks execution of all threads in a group until all memory accesses have been completed.",
        Type::VOID,
    ))?;

    b.expand(&Template::nullary(
        "AllMemoryBarrierWithGroupSync",
        "Blocks execution of all threads in a group until all memory accesses have been completed and all threads in the group have reached this call.",
        Type::VOID,
    ))?;

    b.expand(
        &Template::new(
            "any",
            "Determines if any components of the specified value are non-zero.",
            ALL_NUMERIC_TYPES,
        )
        .param("value", "The specified value")
        .returns(Type::BOOL),
    )?;

    b.expand(
        &Template::new(
            "asdouble",
            "Reinterprets a cast value (two 32-bit values) into a double.",
            TypeFamily::single(Type::UINT),
        )
        .param("lowbits", "The low 32-bit pattern of the input value.")
        .param("highbits", "The high 32-bit pattern of the input value.")
        .returns(Type::DOUBLE),
    )?;
    b.expand(
        &Template::new(
            "asdouble",
            "Reinterprets a cast value (two 32-bit values) into a double.",
            TypeFamily::single(Type::UINT2),
        )
        .param("lowbits", "The low 32-bit pattern of the input values.")
        .param("highbits", "The high 32-bit pattern of the input values.")
        .returns(Type::DOUBLE2),
    )?;

    b.expand(
        &Template::new(
            "atan",
            "Returns the arctangent of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", "The specified value"),
    )?;

    b.expand(
        &Template::new(
            "atan2",
            "Returns the arctangent of two values (x,y).",
            ALL_FLOAT_TYPES,
        )
        .param("y", "The y value.")
        .param("x", "The x value."),
    )?;

    b.expand(
        &Template::new(
            "ceil",
            "Returns the smallest integer value that is greater than or equal to the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", "The specified value"),
    )?;

    b.expand(
        &Template::new(
            "CheckAccessFullyMapped",
            "Determines whether all values from a Sample, Gather, or Load operation accessed mapped tiles in a tiled resource.",
            TypeFamily::single(Type::UINT),
        )
        .param(
            "status",
            "The status value that is returned from a Sample, Gather, or Load operation. Because you can't access this status value directly, you need to pass it to CheckAccessFullyMapped.",
        )
        .returns(Type::BOOL),
    )?;

    b.expand(
        &Template::new(
            "clamp",
            "Clamps the specified value to the specified minimum and maximum range.",
            float_or_int(),
        )
        .param("value", "A value to clamp.")
        .param("min", "The specified minimum range.")
        .param("max", "The specified maximum range."),
    )?;

    b.expand(
        &Template::new(
            "clip",
            "Discards the current pixel if the specified value is less than zero.",
            ALL_FLOAT_TYPES,
        )
        .param("value", "The specified value"),
    )?;

    b.expand(
        &Template::new(
            "cos",
            "Returns the cosine of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", IN_RADIANS),
    )?;

    b.expand(
        &Template::new(
            "cosh",
            "Returns the hyperbolic cosine of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", IN_RADIANS),
    )?;

    b.expand(
        &Template::new(
            "countbits",
            "Counts the number of bits (per component) in the input integer.",
            TypeFamily::single(Type::UINT).union(&ALL_UINT_VECTOR_TYPES),
        )
        .param("value", INPUT_VALUE),
    )?;

    b.expand(
        &Template::new(
            "cross",
            "Returns the cross product of two floating-point, 3D vectors.",
            TypeFamily::single(Type::FLOAT3),
        )
        .param("x", "The first floating-point, 3D vector.")
        .param("y", "The second floating-point, 3D vector."),
    )?;

    b.expand(
        &Template::new(
            "D3DCOLORtoUBYTE4",
            "Converts a floating-point, 4D vector set by a D3DCOLOR to a UBYTE4.",
            TypeFamily::single(Type::FLOAT4),
        )
        .param("value", "The floating-point vector4 to convert.")
        .returns(Type::INT4),
    )?;

    for (name, doc) in [
        (
            "ddx",
            "Returns the partial derivative of the specified value with respect to the screen-space x-coordinate.",
        ),
        (
            "ddx_coarse",
            "Computes a low precision partial derivative with respect to the screen-space x-coordinate.",
        ),
        (
            "ddx_fine",
            "Computes a high precision partial derivative with respect to the screen-space x-coordinate.",
        ),
        (
            "ddy",
            "Returns the partial derivative of the specified value with respect to the screen-space y-coordinate.",
        ),
        (
            "ddy_coarse",
            "Computes a low precision partial derivative with respect to the screen-space y-coordinate.",
        ),
        (
            "ddy_fine",
            "Computes a high precision partial derivative with respect to the screen-space y-coordinate.",
        ),
        (
            "degrees",
            "Converts the specified value from radians to degrees.",
        ),
    ] {
        b.expand(&Template::new(name, doc, ALL_FLOAT_TYPES).param("value", SPECIFIED_VALUE))?;
    }

    b.expand(
        &Template::new(
            "determinant",
            "Returns the determinant of the specified floating-point, square matrix.",
            ALL_FLOAT_MATRIX_TYPES,
        )
        .param("value", SPECIFIED_VALUE)
        .returns(Type::FLOAT),
    )?;

    b.expand(&Template::nullary(
        "DeviceMemoryBarrier",
        "Blocks execution of all threads in a group until all device memory accesses have been completed.",
        Type::VOID,
    ))?;

    b.expand(&Template::nullary(
        "DeviceMemoryBarrierWithGroupSync",
        "Blocks execution of all threads in a group until all device memory accesses have been completed and all threads in the group have reached this call.",
        Type::VOID,
    ))?;

    b.expand(
        &Template::new(
            "distance",
            "Returns a distance scalar between two vectors.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("x", "The first floating-point vector to compare.")
        .param("y", "The second floating-point vector to compare.")
        .returns(Type::FLOAT),
    )?;

    b.expand(
        &Template::new(
            "dot",
            "Returns the dot product of two vectors.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("x", "The first vector.")
        .param("y", "The second vector.")
        .returns(Type::FLOAT),
    )?;
    b.expand(
        &Template::new(
            "dot",
            "Returns the dot product of two vectors.",
            ALL_INT_VECTOR_TYPES,
        )
        .param("x", "The first vector.")
        .param("y", "The second vector.")
        .returns(Type::INT),
    )?;

    b.expand(
        &Template::new(
            "dst",
            "Calculates a distance vector.",
            TypeFamily::single(Type::FLOAT4),
        )
        .param("x", "The first vector.")
        .param("y", "The second vector."),
    )?;

    // TODO: errorf needs a string type and variadic parameters.

    b.expand(
        &Template::new(
            "EvaluateAttributeAtCentroid",
            "Evaluates at the pixel centroid.",
            ALL_NUMERIC_TYPES,
        )
        .param("value", INPUT_VALUE),
    )?;

    b.expand(
        &Template::new(
            "EvaluateAttributeAtSample",
            "Evaluates at the indexed sample location.",
            ALL_NUMERIC_TYPES,
        )
        .param("value", INPUT_VALUE)
        .param("sampleIndex", "The sample location.")
        .param_type(1, Type::UINT),
    )?;

    b.expand(
        &Template::new(
            "EvaluateAttributeSnapped",
            "Evaluates at the pixel centroid with an offset.",
            ALL_NUMERIC_TYPES,
        )
        .param("value", INPUT_VALUE)
        .param(
            "offset",
            "A 2D offset from the pixel center using a 16x16 grid.",
        )
        .param_type(1, Type::INT2),
    )?;

    b.expand(
        &Template::new(
            "exp",
            "Returns the base-e exponential, or e^x, of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "exp2",
            "Returns the base 2 exponential, or 2^x, of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "f16tof32",
            "Converts the float16 stored in the low-half of the uint to a float.",
            TypeFamily::single(Type::UINT).union(&ALL_UINT_VECTOR_TYPES),
        )
        .param("value", INPUT_VALUE)
        .returns_each(TypeFamily::single(Type::FLOAT).union(&ALL_FLOAT_VECTOR_TYPES).iter()),
    )?;

    b.expand(
        &Template::new(
            "f32tof16",
            "Converts an input into a float16 type.",
            TypeFamily::single(Type::FLOAT).union(&ALL_FLOAT_VECTOR_TYPES),
        )
        .param("value", INPUT_VALUE)
        .returns_each(TypeFamily::single(Type::UINT).union(&ALL_UINT_VECTOR_TYPES).iter()),
    )?;

    b.expand(
        &Template::new(
            "faceforward",
            "Flips the surface-normal (if needed) to face in a direction opposite to i; returns the result in n.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("n", "The resulting floating-point surface-normal vector.")
        .param(
            "i",
            "A floating-point, incident vector that points from the view position to the shading position.",
        )
        .param("ng", "A floating-point surface-normal vector."),
    )?;

    let int_then_uint = TypeFamily::single(Type::INT)
        .union(&ALL_INT_VECTOR_TYPES)
        .union(&TypeFamily::single(Type::UINT))
        .union(&ALL_UINT_VECTOR_TYPES);

    b.expand(
        &Template::new(
            "firstbithigh",
            "Gets the location of the first set bit starting from the highest order bit and working downward, per component.",
            int_then_uint.clone(),
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "firstbitlow",
            "Returns the location of the first set bit starting from the lowest order bit and working upward, per component.",
            int_then_uint,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "floor",
            "Returns the largest integer that is less than or equal to the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "fma",
            "Returns the double-precision fused multiply-addition of a * b + c.",
            ALL_DOUBLE_TYPES,
        )
        .param("a", "The first value in the fused multiply-addition.")
        .param("b", "The second value in the fused multiply-addition.")
        .param("c", "The third value in the fused multiply-addition."),
    )?;

    b.expand(
        &Template::new(
            "fmod",
            "Returns the floating-point remainder of x/y.",
            ALL_FLOAT_TYPES,
        )
        .param("x", "The floating-point dividend.")
        .param("y", "The floating-point divisor."),
    )?;

    b.expand(
        &Template::new(
            "frac",
            "Returns the fractional (or decimal) part of x; which is greater than or equal to 0 and less than 1.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "frexp",
            "Returns the mantissa and exponent of the specified floating-point value.",
            ALL_FLOAT_TYPES,
        )
        .param(
            "x",
            "The specified floating-point value. If the x parameter is 0, this function returns 0 for both the mantissa and the exponent.",
        )
        .param("exp", "The returned exponent of the x parameter.")
        .param_direction(1, Out),
    )?;

    b.expand(
        &Template::new(
            "fwidth",
            "Returns the absolute value of the partial derivatives of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(&Template::nullary(
        "GetRenderTargetSampleCount",
        "Gets the number of samples for a render target.",
        Type::UINT,
    ))?;

    b.expand(
        &Template::new(
            "GetRenderTargetSamplePosition",
            "Gets the sampling position (x,y) for a given sample index.",
            TypeFamily::single(Type::INT),
        )
        .param("index", "A zero-based sample index.")
        .returns(Type::FLOAT2),
    )?;

    b.expand(&Template::nullary(
        "GroupMemoryBarrier",
        "Blocks execution of all threads in a group until all group shared accesses have been completed.",
        Type::VOID,
    ))?;

    b.expand(&Template::nullary(
        "GroupMemoryBarrierWithGroupSync",
        "Blocks execution of all threads in a group until all group shared accesses have been completed and all threads in the group have reached this call.",
        Type::VOID,
    ))?;

    register_interlocked(b)?;

    for (name, doc) in [
        (
            "isfinite",
            "Determines if the specified floating-point value is finite.",
        ),
        ("isinf", "Determines if the specified value is infinite."),
        ("isnan", "Determines if the specified value is NAN or QNAN."),
    ] {
        b.expand(
            &Template::new(name, doc, ALL_FLOAT_TYPES)
                .param("value", SPECIFIED_VALUE)
                .returns_each(ALL_BOOL_TYPES.iter()),
        )?;
    }

    // Documentation text matches the shipped reference, including its copy of
    // the `isnan` summary.
    b.expand(
        &Template::new(
            "ldexp",
            "Determines if the specified value is NAN or QNAN.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE)
        .param("exp", "The specified exponent."),
    )?;

    b.expand(
        &Template::new(
            "length",
            "Returns the length of the specified floating-point vector.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("value", "The specified floating-point vector.")
        .returns(Type::FLOAT),
    )?;

    b.expand(
        &Template::new(
            "lerp",
            "Performs a linear interpolation.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("x", "The first floating-point value.")
        .param("y", "The second floating-point value.")
        .param(
            "s",
            "A value that linearly interpolates between the x parameter and the y parameter.",
        ),
    )?;

    b.expand(
        &Template::new(
            "lit",
            "Returns a lighting coefficient vector.",
            TypeFamily::single(Type::FLOAT),
        )
        .param(
            "nDotL",
            "The dot product of the normalized surface normal and the light vector.",
        )
        .param(
            "nDotH",
            "The dot product of the half-angle vector and the surface normal.",
        )
        .param("m", "A specular exponent.")
        .returns(Type::FLOAT4),
    )?;

    for (name, doc) in [
        ("log", "Returns the base-e logarithm of the specified value."),
        ("log10", "Returns the base-10 logarithm of the specified value."),
        ("log2", "Returns the base-2 logarithm of the specified value."),
    ] {
        b.expand(
            &Template::new(name, doc, ALL_FLOAT_VECTOR_TYPES).param("value", SPECIFIED_VALUE),
        )?;
    }

    b.expand(
        &Template::new(
            "mad",
            "Performs an arithmetic multiply/add operation on three values.",
            ALL_NUMERIC_TYPES,
        )
        .param("m", "The multiplication value.")
        .param("a", "The first addition value.")
        .param("b", "The second addition value."),
    )?;

    b.expand(
        &Template::new("max", "Selects the greater of x and y.", float_or_int())
            .param("x", "The x input value.")
            .param("y", "The y input value."),
    )?;

    b.expand(
        &Template::new("min", "Selects the lesser of x and y.", float_or_int())
            .param("x", "The x input value.")
            .param("y", "The y input value."),
    )?;

    b.expand(
        &Template::new(
            "modf",
            "Splits the value x into fractional and integer parts, each of which has the same sign as x.",
            float_or_int(),
        )
        .param("x", "The x input value.")
        .param("ip", "The integer portion of x.")
        .param_direction(1, Out),
    )?;

    b.expand(
        &Template::new(
            "msad4",
            "Compares a 4-byte reference value and an 8-byte source value and accumulates a vector of 4 sums. Each sum corresponds to the masked sum of absolute differences of a different byte alignment between the reference value and the source value.",
            TypeFamily::single(Type::UINT),
        )
        .param("reference", "The reference array of 4 bytes in one uint value.")
        .param("source", "The source array of 8 bytes in two uint2 values.")
        .param(
            "accum",
            "A vector of 4 values. msad4 adds this vector to the masked sum of absolute differences of the different byte alignments between the reference value and the source value.",
        )
        .returns(Type::UINT4)
        .param_type(1, Type::UINT2)
        .param_type(2, Type::UINT4),
    )?;

    register_mul(b)?;

    b.expand(
        &Template::new(
            "noise",
            "Generates a random value using the Perlin-noise algorithm.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param(
            "value",
            "A floating-point vector from which to generate Perlin noise.",
        )
        .returns(Type::FLOAT),
    )?;

    b.expand(
        &Template::new(
            "normalize",
            "Normalizes the specified floating-point vector according to x / length(x).",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("value", "The specified floating-point vector."),
    )?;

    b.expand(
        &Template::new(
            "pow",
            "Returns the specified value raised to the specified power.",
            ALL_FLOAT_TYPES,
        )
        .param("x", "The specified value.")
        .param("y", "The specified power."),
    )?;

    // TODO: printf needs a string type and variadic parameters.

    register_tessellation(b)?;

    b.expand(
        &Template::new(
            "radians",
            "Converts the specified value from degrees to radians.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "rcp",
            "Calculates a fast, approximate, per-component reciprocal.",
            ALL_FLOAT_TYPES.union(&ALL_DOUBLE_TYPES),
        )
        .param("value", INPUT_VALUE),
    )?;

    b.expand(
        &Template::new(
            "reflect",
            "Returns a reflection vector using an incident ray and a surface normal.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("i", "A floating-point, incident vector.")
        .param("n", "A floating-point, normal vector."),
    )?;

    b.expand(
        &Template::new(
            "refract",
            "Returns a refraction vector using an entering ray, a surface normal, and a refraction index.",
            ALL_FLOAT_VECTOR_TYPES,
        )
        .param("i", "A floating-point, ray direction vector.")
        .param("n", "A floating-point, surface normal vector.")
        .param("η", "A floating-point, refraction index scalar.")
        .param_type(2, Type::FLOAT),
    )?;

    b.expand(
        &Template::new(
            "reversebits",
            "Reverses the order of the bits, per component.",
            TypeFamily::single(Type::UINT).union(&ALL_UINT_VECTOR_TYPES),
        )
        .param("value", INPUT_VALUE),
    )?;

    b.expand(
        &Template::new(
            "round",
            "Rounds the specified value to the nearest integer.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "rsqrt",
            "Returns the reciprocal of the square root of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    b.expand(
        &Template::new(
            "saturate",
            "Clamps the specified value within the range of 0 to 1.",
            ALL_FLOAT_TYPES,
        )
        .param("value", SPECIFIED_VALUE),
    )?;

    // One int return per float member, then one per int member.
    b.expand(
        &Template::new("sign", "Returns the sign of x.", float_or_int())
            .param("value", INPUT_VALUE)
            .returns_each(ALL_INT_TYPES.iter().chain(ALL_INT_TYPES.iter())),
    )?;

    b.expand(
        &Template::new(
            "sin",
            "Returns the sine of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", IN_RADIANS),
    )?;

    b.expand(
        &Template::new("sincos", "Returns the sine and cosine of x.", ALL_FLOAT_TYPES)
            .param("value", IN_RADIANS)
            .param("s", "Returns the sine of x.")
            .param("c", "Returns the cosine of x.")
            .returns(Type::VOID)
            .param_direction(1, Out)
            .param_direction(2, Out),
    )?;

    b.expand(
        &Template::new(
            "sinh",
            "Returns the hyperbolic sine of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", IN_RADIANS),
    )?;

    b.expand(
        &Template::new(
            "smoothstep",
            "Returns a smooth Hermite interpolation between 0 and 1, if x is in the range [min, max].",
            ALL_FLOAT_TYPES,
        )
        .param("min", "The minimum range of the x parameter.")
        .param("max", "The maximum range of the x parameter.")
        .param("x", "The specified value to be interpolated."),
    )?;

    b.expand(
        &Template::new(
            "sqrt",
            "Returns the square root of the specified floating-point value, per component.",
            ALL_FLOAT_TYPES,
        )
        .param("value", "The specified floating-point value."),
    )?;

    b.expand(
        &Template::new(
            "step",
            "Compares two values, returning 0 or 1 based on which value is greater.",
            ALL_FLOAT_TYPES,
        )
        .param("y", "The first floating-point value to compare.")
        .param("x", "The second floating-point value to compare."),
    )?;

    b.expand(
        &Template::new(
            "tan",
            "Returns the tangent of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", IN_RADIANS),
    )?;

    b.expand(
        &Template::new(
            "tanh",
            "Returns the hyperbolic tangent of the specified value.",
            ALL_FLOAT_TYPES,
        )
        .param("value", IN_RADIANS),
    )?;

    Ok(())
}

/// Atomic read-modify-write operations on `int` and `uint` destinations.
fn register_interlocked(b: &mut CatalogBuilder) -> Result<(), CatalogError> {
    let binary = |name: &'static str, doc: &'static str| {
        Template::new(name, doc, int_or_uint())
            .param("dest", DEST)
            .param("value", INPUT_VALUE)
            .returns(Type::VOID)
    };
    let with_original = |name: &'static str, doc: &'static str| {
        binary(name, doc)
            .param("originalValue", ORIGINAL_INPUT_VALUE)
            .param_direction(2, Out)
    };

    let add = "Performs a guaranteed atomic add of value to the dest resource variable.";
    b.expand(&binary("InterlockedAdd", add))?;
    b.expand(&with_original("InterlockedAdd", add))?;

    let and = "Performs a guaranteed atomic and.";
    b.expand(&binary("InterlockedAnd", and))?;
    b.expand(&with_original("InterlockedAnd", and))?;

    b.expand(
        &Template::new(
            "InterlockedCompareExchange",
            "Atomically compares the destination with the comparison value. If they are identical, the destination is overwritten with the input value. The original value is set to the destination's original value.",
            int_or_uint(),
        )
        .param("dest", DEST)
        .param("compareValue", "The comparison value.")
        .param("value", INPUT_VALUE)
        .param("originalValue", "The original value.")
        .returns(Type::VOID)
        .param_direction(3, Out),
    )?;

    b.expand(
        &Template::new(
            "InterlockedCompareStore",
            "Atomically compares the destination to the comparison value. If they are identical, the destination is overwritten with the input value.",
            int_or_uint(),
        )
        .param("dest", DEST)
        .param("compareValue", "The comparison value.")
        .param("value", INPUT_VALUE)
        .returns(Type::VOID),
    )?;

    b.expand(&with_original(
        "InterlockedExchange",
        "Assigns value to dest and returns the original value.",
    ))?;

    for (name, doc) in [
        ("InterlockedMax", "Performs a guaranteed atomic max."),
        ("InterlockedMin", "Performs a guaranteed atomic min."),
        ("InterlockedOr", "Performs a guaranteed atomic or."),
        ("InterlockedXor", "Performs a guaranteed atomic xor."),
    ] {
        b.expand(&binary(name, doc))?;
        b.expand(&with_original(name, doc))?;
    }

    Ok(())
}

/// The supported `mul` forms, float then int for each.
fn register_mul(b: &mut CatalogBuilder) -> Result<(), CatalogError> {
    let mul = |family: TypeFamily| {
        Template::new("mul", MUL_DOC, family)
            .param("x", MUL_X)
            .param("y", MUL_Y)
    };

    // scalar * scalar
    b.expand(&mul(TypeFamily::single(Type::FLOAT).with(Type::INT)))?;

    // scalar * vector
    b.expand(&mul(ALL_FLOAT_VECTOR_TYPES).param_type(0, Type::FLOAT))?;
    b.expand(&mul(ALL_INT_VECTOR_TYPES).param_type(0, Type::INT))?;

    // scalar * matrix
    b.expand(&mul(ALL_FLOAT_MATRIX_TYPES).param_type(0, Type::FLOAT))?;
    b.expand(&mul(ALL_INT_MATRIX_TYPES).param_type(0, Type::INT))?;

    // vector * scalar
    b.expand(&mul(ALL_FLOAT_VECTOR_TYPES).param_type(1, Type::FLOAT))?;
    b.expand(&mul(ALL_INT_VECTOR_TYPES).param_type(1, Type::INT))?;

    // vector * vector
    b.expand(&mul(ALL_FLOAT_VECTOR_TYPES).returns(Type::FLOAT))?;
    b.expand(&mul(ALL_INT_VECTOR_TYPES).returns(Type::INT))?;

    // TODO: vector * matrix, matrix * scalar, matrix * vector and matrix * matrix
    // need non-square matrix families.

    Ok(())
}

/// Hull-shader tessellation factor helpers. These have fixed signatures.
fn register_tessellation(b: &mut CatalogBuilder) -> Result<(), CatalogError> {
    let quad = |name: &'static str, inside_scale: Type| {
        Overload::new(
            name,
            QUAD_TESS_DOC,
            Type::VOID,
            [
                ParameterSignature::new("rawEdgeFactors", RAW_EDGE_FACTORS, Type::FLOAT4),
                ParameterSignature::new("insideScale", INSIDE_SCALE, inside_scale),
                ParameterSignature::new("roundedEdgeTessFactors", ROUNDED_EDGE, Type::FLOAT4).out(),
                ParameterSignature::new("roundedInsideTessFactors", ROUNDED_INSIDE, Type::FLOAT2)
                    .out(),
                ParameterSignature::new(
                    "unroundedInsideTessFactors",
                    UNROUNDED_INSIDE,
                    Type::FLOAT2,
                )
                .out(),
            ],
        )
    };

    b.declare(quad("Process2DQuadTessFactorsAvg", Type::FLOAT2))?;
    b.declare(quad("Process2DQuadTessFactorsMax", Type::FLOAT2))?;
    b.declare(quad("Process2DQuadTessFactorsMin", Type::FLOAT2))?;

    b.declare(Overload::new(
        "ProcessIsolineTessFactors",
        "Generates the rounded tessellation factors for an isoline.",
        Type::VOID,
        [
            ParameterSignature::new("rawDetailFactor", "The desired detail factor.", Type::FLOAT),
            ParameterSignature::new("rawDensityFactor", "The desired density factor.", Type::FLOAT),
            ParameterSignature::new(
                "roundedDetailFactor",
                "The rounded detail factor clamped to a range that can be used by the tessellator.",
                Type::FLOAT,
            )
            .out(),
            ParameterSignature::new(
                "roundedDensityFactor",
                "The rounded density factor clamped to a rangethat can be used by the tessellator.",
                Type::FLOAT,
            )
            .out(),
        ],
    ))?;

    b.declare(quad("ProcessQuadTessFactorsAvg", Type::FLOAT))?;
    b.declare(quad("ProcessQuadTessFactorsMax", Type::FLOAT))?;
    b.declare(quad("ProcessQuadTessFactorsMin", Type::FLOAT))?;

    let tri = |name: &'static str| {
        Overload::new(
            name,
            TRI_TESS_DOC,
            Type::VOID,
            [
                ParameterSignature::new("rawEdgeFactors", RAW_EDGE_FACTORS, Type::FLOAT3),
                ParameterSignature::new("insideScale", INSIDE_SCALE, Type::FLOAT),
                ParameterSignature::new("roundedEdgeTessFactors", ROUNDED_EDGE, Type::FLOAT3).out(),
                ParameterSignature::new("roundedInsideTessFactors", ROUNDED_INSIDE, Type::FLOAT)
                    .out(),
                ParameterSignature::new("unroundedInsideTessFactors", UNROUNDED_INSIDE, Type::FLOAT)
                    .out(),
            ],
        )
    };

    b.declare(tri("ProcessTriTessFactorsAvg"))?;
    b.declare(tri("ProcessTriTessFactorsMax"))?;
    b.declare(tri("ProcessTriTessFactorsMin"))?;

    Ok(())
}
