/// Brings `HashMap` into scope from `hashbrown` when the `hashbrown` feature
/// is on, from `std::collections` otherwise.
#[macro_export]
#[doc(hidden)]
macro_rules! import_hash_map {
    () => {
        #[cfg(feature = "hashbrown")]
        use hashbrown::HashMap;
        #[cfg(not(feature = "hashbrown"))]
        use std::collections::HashMap;
    };
}

/// Keeps `$item`s only when the `std` feature is on.
#[macro_export]
#[doc(hidden)]
macro_rules! cfg_std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
            $item
        )*
    };
}
