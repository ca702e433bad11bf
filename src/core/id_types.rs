//! The `define_id_types` macro.

/// Defines types that consist of a single small integer ID.
///
/// You specify for each such type its name and the number of distinct values
/// of the type.  IDs are stored as `u8`s, and serialize as plain numbers.
#[macro_export]
macro_rules! define_id_types {
    (
        $(
            $(#[$outer:meta])*
            $type_name:ident[$count:expr];
        )*
    ) => {
        $(
            define_id_types!(
                @nested $(#[$outer])* $type_name, $count,
                concat!("The number of distinct values a `",
                    stringify!($type_name), "` may take on."),
                concat!(
                    "Makes a new `", stringify!($type_name),
                    "` given its ID, if it's in the range 0..",
                    stringify!($count), "."),
                concat!("Iterates all distinct `", stringify!($type_name), "` values.")
            );
        )*
    };
    (
        @nested
        $(#[$outer:meta])*
        $type_name:ident, $count:expr,
        $count_doc:expr,
        $new_doc:expr,
        $all_doc:expr
    ) => {
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
        $(#[$outer])*
        pub struct $type_name(u8);

        impl $type_name {
            #[doc = $count_doc]
            pub const COUNT: usize = $count;

            #[doc = $new_doc]
            pub const fn new(id: u8) -> Option<Self> {
                if (id as usize) < $count {
                    Some($type_name(id))
                } else {
                    None
                }
            }

            #[doc = $new_doc]
            pub const fn from_index(i: usize) -> Option<Self> {
                if i < $count {
                    Some($type_name(i as u8))
                } else {
                    None
                }
            }

            /// Returns this value's ID.
            pub const fn get(self) -> u8 {
                self.0
            }

            /// Returns this value's ID in a form suitable for use as an array
            /// index.
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[doc = $all_doc]
            pub fn all() -> impl Iterator<Item = Self> {
                (0..$count as u8).map($type_name)
            }
        }

        impl TryFrom<usize> for $type_name {
            type Error = &'static str;
            #[doc = $new_doc]
            fn try_from(value: usize) -> Result<Self, Self::Error> {
                $type_name::from_index(value).ok_or("Out of bounds")
            }
        }

        impl From<$type_name> for usize {
            fn from(id: $type_name) -> Self {
                id.index()
            }
        }
    };
}
