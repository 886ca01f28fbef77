/// Builds a [`VarMap`](crate::VarMap) from `key: value` pairs, in order.
///
/// Values go through [`VarValue::from`](crate::VarValue) and are stored in
/// their raw form, so strings are kept verbatim, booleans become
/// `true`/`false` and numbers are written in shortest round-trip form.
///
/// ```rust
/// use serde_vars::vars;
///
/// let map = vars! {
///     "GOOS": "linux",
///     "CGO_ENABLED": true,
///     "RATIO": 0.625,
/// };
/// assert_eq!(map.get("CGO_ENABLED"), Some("true"));
/// assert_eq!(map.get_float("RATIO").unwrap(), Some(0.625));
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::VarMap::new()
    };

    ($($key:literal : $value:expr),+ $(,)?) => {{
        let mut map = $crate::VarMap::new();
        $(
            map.insert(
                $key.to_string(),
                $crate::to_raw(&$crate::VarValue::from($value)),
            );
        )+
        map
    }};
}
