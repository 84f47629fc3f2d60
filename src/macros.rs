#[macro_export]
macro_rules! entry {
    ( $key: expr, $value: expr) => {
        $crate::hashmap::Entry {
            key: $key.into(),
            value: $value.into(),
        }
    };
}
