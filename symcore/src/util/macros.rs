// Literal builders for term dictionaries.

#[macro_export]
macro_rules! udict {
    {$( $key: expr => $val: expr ),* $(,)?} => {{
        $crate::MapUintMpz::from_iter([$(($key, num_bigint::BigInt::from($val)),)*])
    }}
}

#[macro_export]
macro_rules! mdict {
    {$( [$($e: expr),*] => $val: expr ),* $(,)?} => {{
        $crate::UmapUvecMpz::from_iter([$(
            ($crate::ExpVec::from(vec![$($e),*]), num_bigint::BigInt::from($val)),
        )*])
    }}
}

#[macro_export]
macro_rules! symbols {
    ($($name: ident),*) => {{
        ($($crate::Symbol::new(stringify!($name)),)*)
    }}
}

pub use {udict, mdict, symbols};
