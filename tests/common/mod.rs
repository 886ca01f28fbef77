//! Shared fixture tables and document generators for the integration tests.

#![allow(dead_code)]

use serde_vars::ErrorKind;

pub struct StringTest {
    pub key: &'static str,
    pub input: &'static str,
    pub want: &'static str,
}

/// `go env` output from a linux/amd64 host.
pub const STRING_TESTS: &[StringTest] = &[
    StringTest { key: "GOARCH", input: "amd64", want: "amd64" },
    StringTest { key: "GOHOSTARCH", input: "amd", want: "amd" },
    StringTest { key: "GOHOSTOS", input: "linux", want: "linux" },
    StringTest { key: "GOOS", input: "linux", want: "linux" },
    StringTest { key: "GOPATH", input: "/go-workspace", want: "/go-workspace" },
    StringTest { key: "GOROOT", input: "/usr/lib/golang", want: "/usr/lib/golang" },
    StringTest {
        key: "GOTOOLDIR",
        input: "/usr/lib/golang/pkg/tool/linux_amd64",
        want: "/usr/lib/golang/pkg/tool/linux_amd64",
    },
    StringTest { key: "GCCGO", input: "gccgo", want: "gccgo" },
    StringTest { key: "CC", input: "gcc", want: "gcc" },
    StringTest {
        key: "GOGCCFLAGS",
        input: "-fPIC -m64 -pthread -fmessage-length=0",
        want: "-fPIC -m64 -pthread -fmessage-length=0",
    },
    StringTest { key: "CXX", input: "g++", want: "g++" },
    StringTest { key: "PKG_CONFIG", input: "pkg-config", want: "pkg-config" },
    StringTest { key: "CGO_ENABLED", input: "1", want: "1" },
    StringTest { key: "CGO_CFLAGS", input: "-g -O2", want: "-g -O2" },
    StringTest { key: "CGO_CPPFLAGS", input: "", want: "" },
    StringTest { key: "CGO_CXXFLAGS", input: "-g -O2", want: "-g -O2" },
    StringTest { key: "CGO_FFLAGS", input: "-g -O2", want: "-g -O2" },
    StringTest { key: "CGO_LDFLAGS", input: "-g -O2", want: "-g -O2" },
];

pub struct BoolTest {
    pub key: &'static str,
    pub input: &'static str,
    pub want: bool,
    pub err: bool,
}

pub const BOOL_TESTS: &[BoolTest] = &[
    BoolTest { key: "EMPTY", input: "", want: false, err: true },
    BoolTest { key: "GARBAGE", input: "asdf", want: false, err: true },
    BoolTest { key: "ZERO", input: "0", want: false, err: false },
    BoolTest { key: "LOWER_F", input: "f", want: false, err: false },
    BoolTest { key: "UPPER_F", input: "F", want: false, err: false },
    BoolTest { key: "FALSE_UPPER", input: "FALSE", want: false, err: false },
    BoolTest { key: "FALSE_LOWER", input: "false", want: false, err: false },
    BoolTest { key: "FALSE_TITLE", input: "False", want: false, err: false },
    BoolTest { key: "ONE", input: "1", want: true, err: false },
    BoolTest { key: "LOWER_T", input: "t", want: true, err: false },
    BoolTest { key: "UPPER_T", input: "T", want: true, err: false },
    BoolTest { key: "TRUE_UPPER", input: "TRUE", want: true, err: false },
    BoolTest { key: "TRUE_LOWER", input: "true", want: true, err: false },
    BoolTest { key: "TRUE_TITLE", input: "True", want: true, err: false },
    BoolTest { key: "MIXED", input: "tRUE", want: false, err: true },
    BoolTest { key: "YES", input: "yes", want: false, err: true },
];

pub struct FloatTest {
    pub key: String,
    pub input: String,
    /// Shortest formatting of the value, including the value reported alongside
    /// an error.
    pub want: &'static str,
    pub err: Option<ErrorKind>,
}

const SYNTAX: Option<ErrorKind> = Some(ErrorKind::Syntax);
const RANGE: Option<ErrorKind> = Some(ErrorKind::Range);

const FLOAT_ROWS: &[(&str, &str, Option<ErrorKind>)] = &[
    ("", "0", SYNTAX),
    ("1", "1", None),
    ("+1", "1", None),
    ("1x", "0", SYNTAX),
    ("1.1.", "0", SYNTAX),
    ("1e23", "1e+23", None),
    ("1E23", "1e+23", None),
    ("100000000000000000000000", "1e+23", None),
    ("1e-100", "1e-100", None),
    ("123456700", "1.234567e+08", None),
    ("99999999999999974834176", "9.999999999999997e+22", None),
    ("100000000000000000000001", "1.0000000000000001e+23", None),
    ("100000000000000008388608", "1.0000000000000001e+23", None),
    ("100000000000000016777215", "1.0000000000000001e+23", None),
    ("100000000000000016777216", "1.0000000000000003e+23", None),
    ("-1", "-1", None),
    ("-0.1", "-0.1", None),
    ("-0", "-0", None),
    ("1e-20", "1e-20", None),
    ("625e-3", "0.625", None),
    // zeros
    ("0", "0", None),
    ("0e0", "0", None),
    ("-0e0", "-0", None),
    ("+0e0", "0", None),
    ("0e-0", "0", None),
    ("-0e-0", "-0", None),
    ("0e+01234567890123456789", "0", None),
    ("0.00e-01234567890123456789", "0", None),
    ("-0e+01234567890123456789", "-0", None),
    ("-0.00e-01234567890123456789", "-0", None),
    ("0e291", "0", None),
    ("0e292", "0", None),
    ("0e347", "0", None),
    ("0e348", "0", None),
    ("-0e291", "-0", None),
    ("-0e348", "-0", None),
    // specials
    ("nan", "NaN", None),
    ("NaN", "NaN", None),
    ("NAN", "NaN", None),
    ("inf", "+Inf", None),
    ("-Inf", "-Inf", None),
    ("+INF", "+Inf", None),
    ("-Infinity", "-Inf", None),
    ("+INFINITY", "+Inf", None),
    ("Infinity", "+Inf", None),
    ("-nan", "0", SYNTAX),
    ("infin", "0", SYNTAX),
    // largest double
    ("1.7976931348623157e308", "1.7976931348623157e+308", None),
    ("-1.7976931348623157e308", "-1.7976931348623157e+308", None),
    // next double up overflows
    ("1.7976931348623159e308", "+Inf", RANGE),
    ("-1.7976931348623159e308", "-Inf", RANGE),
    // the rounding border is 1.797693134862315807937...e308
    ("1.7976931348623158e308", "1.7976931348623157e+308", None),
    ("-1.7976931348623158e308", "-1.7976931348623157e+308", None),
    ("1.797693134862315808e308", "+Inf", RANGE),
    ("-1.797693134862315808e308", "-Inf", RANGE),
    ("1e308", "1e+308", None),
    ("2e308", "+Inf", RANGE),
    ("1e309", "+Inf", RANGE),
    ("1e310", "+Inf", RANGE),
    ("-1e310", "-Inf", RANGE),
    ("1e400", "+Inf", RANGE),
    ("-1e400", "-Inf", RANGE),
    ("1e400000", "+Inf", RANGE),
    ("-1e400000", "-Inf", RANGE),
    // subnormals
    ("1e-305", "1e-305", None),
    ("1e-306", "1e-306", None),
    ("1e-307", "1e-307", None),
    ("1e-308", "1e-308", None),
    ("1e-309", "1e-309", None),
    ("1e-310", "1e-310", None),
    ("1e-322", "1e-322", None),
    ("5e-324", "5e-324", None),
    ("4e-324", "5e-324", None),
    ("3e-324", "5e-324", None),
    ("2e-324", "0", None),
    ("1e-350", "0", None),
    ("1e-400000", "0", None),
    // exponent saturation
    ("1e-4294967296", "0", None),
    ("1e+4294967296", "+Inf", RANGE),
    ("1e-18446744073709551616", "0", None),
    ("1e+18446744073709551616", "+Inf", RANGE),
    // malformed
    ("1e", "0", SYNTAX),
    ("1e-", "0", SYNTAX),
    (".e-1", "0", SYNTAX),
    (".", "0", SYNTAX),
    ("1\x00.2", "0", SYNTAX),
    ("1_23.50_0_0e+1_2", "0", SYNTAX),
    ("0x1p-2", "0", SYNTAX),
    (" 1", "0", SYNTAX),
    ("1 ", "0", SYNTAX),
    // smallest normal and its neighbourhood
    ("2.2250738585072012e-308", "2.2250738585072014e-308", None),
    ("2.2250738585072011e-308", "2.225073858507201e-308", None),
    ("4.630813248087435e+307", "4.630813248087435e+307", None),
    ("22.222222222222222", "22.22222222222222", None),
    // halfway between 1 and the next double: ties to even
    ("1.00000000000000011102230246251565404236316680908203125", "1", None),
    ("1.00000000000000011102230246251565404236316680908203124", "1", None),
    ("1.00000000000000011102230246251565404236316680908203126", "1.0000000000000002", None),
    // halfway between the next two doubles: ties to even, upwards
    ("1.00000000000000033306690738754696212708950042724609375", "1.0000000000000004", None),
    ("1090544144181609348671888949248", "1.0905441441816093e+30", None),
    ("1090544144181609348835077142190", "1.0905441441816094e+30", None),
];

/// Every float case, including the generated long literals.
pub fn float_tests() -> Vec<FloatTest> {
    let mut tests: Vec<FloatTest> = FLOAT_ROWS
        .iter()
        .enumerate()
        .map(|(i, &(input, want, err))| FloatTest {
            key: format!("FLOAT_{i}"),
            input: input.to_string(),
            want,
            err,
        })
        .collect();

    let generated = [
        (format!("2.{}e+1", "2".repeat(4000)), "22.22222222222222"),
        (
            format!(
                "1.00000000000000011102230246251565404236316680908203125{}1",
                "0".repeat(10000)
            ),
            "1.0000000000000002",
        ),
        (format!("0.{}1e+100", "0".repeat(99)), "1"),
    ];
    for (input, want) in generated {
        tests.push(FloatTest {
            key: format!("FLOAT_{}", tests.len()),
            input,
            want,
            err: None,
        });
    }
    tests
}

fn line(out: &mut Vec<u8>, key: &str, input: &str) {
    out.extend_from_slice(format!("{key}=\"{input}\"\n").as_bytes());
}

pub fn gen_string_test_bytes() -> Vec<u8> {
    let mut out = Vec::new();
    for test in STRING_TESTS {
        line(&mut out, test.key, test.input);
    }
    out
}

pub fn gen_bool_test_bytes() -> Vec<u8> {
    let mut out = Vec::new();
    for test in BOOL_TESTS {
        line(&mut out, test.key, test.input);
    }
    out
}

pub fn gen_float_test_bytes() -> Vec<u8> {
    let mut out = Vec::new();
    for test in float_tests() {
        line(&mut out, &test.key, &test.input);
    }
    out
}
