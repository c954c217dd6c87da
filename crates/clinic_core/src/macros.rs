/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for the clinic content model.

/// Generates a closed, string-backed enum with `as_str`, exact-match `parse`,
/// an `ALL` listing in declaration order, and a `Display` impl.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }

            /// Exact-match parse of the string value; anything else is `None`.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

/// Generates a content record read from the API's flat `<field>_<suffix>` layout.
///
/// `localized` fields become [`Localized`](crate::localized::Localized) values,
/// `text` fields are single-language strings (numbers are accepted and kept as
/// their decimal text). Every record gets an optional `id`. The record
/// round-trips through [`RawRecord`](crate::record::RawRecord) for serde.
macro_rules! content_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            localized: [$($lfield:ident),* $(,)?],
            text: [$($tfield:ident),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(from = "crate::record::RawRecord", into = "crate::record::RawRecord")]
        $vis struct $name {
            pub id: Option<crate::record::RecordId>,
            $( pub $lfield: crate::localized::Localized, )*
            $( pub $tfield: Option<String>, )*
        }

        impl From<crate::record::RawRecord> for $name {
            fn from(record: crate::record::RawRecord) -> Self {
                Self {
                    id: record.id(),
                    $( $lfield: record.localized(stringify!($lfield)), )*
                    $( $tfield: record.text(stringify!($tfield)), )*
                }
            }
        }

        impl From<$name> for crate::record::RawRecord {
            #[allow(unused_mut)]
            fn from(value: $name) -> Self {
                let mut record = crate::record::RawRecord::default();
                record.put_id(value.id.as_ref());
                $( record.put_localized(stringify!($lfield), &value.$lfield); )*
                $( record.put_text(stringify!($tfield), value.$tfield.as_deref()); )*
                record
            }
        }

        impl crate::entity::LocalizableEntity for $name {
            fn localized_fields(&self) -> &'static [&'static str] {
                &[$( stringify!($lfield), )*]
            }

            #[allow(unused_variables)]
            fn localized_field(&self, field: &str) -> Option<&crate::localized::Localized> {
                $(
                    if field == stringify!($lfield) {
                        return Some(&self.$lfield);
                    }
                )*
                None
            }
        }
    };
}

/// Merges fields from a target struct `source` into a mutable `target` if `source.field.is_some()`.
/// This simplifies boilerplate in configuration merge implementations.
#[macro_export]
macro_rules! merge_options {
    ($target:expr, $source:expr, $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field.clone();
            }
        )+
    };
}

// Builder macro for tests and fixtures.

/// Builds a [`Localized`](crate::localized::Localized) value from `suffix = "text"` pairs.
///
/// # Examples
/// ```
/// let title = clinic_core::localized!(uz = "Asosiy", ru = "Главный");
/// assert_eq!(title.ru.as_deref(), Some("Главный"));
/// assert!(title.en.is_none());
/// ```
#[macro_export]
macro_rules! localized {
    ($($suffix:ident = $val:expr),* $(,)?) => {
        $crate::localized::Localized {
            $( $suffix: Some($val.into()), )*
            ..Default::default()
        }
    };
}
