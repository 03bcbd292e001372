// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared across the workspace.

/// `Display` for a fieldless enum, one string literal per variant.
///
/// ```ignore
/// versus_core::simple_display! {
///     Mark { Same => " ", Changed => "~" }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident => $text:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let text = match self {
                    $( Self::$variant => $text, )+
                };
                f.write_str(text)
            }
        }
    };
}

/// Test-only builder for a plain struct whose fields all have defaults.
///
/// Every setter accepts `impl Into<T>`, so string fields take `&str`.
/// The builder and the target's `builder()` constructor exist only under `cfg(test)` or the
/// `test-support` feature.
///
/// ```ignore
/// versus_core::builder! {
///     RunBuilder => Run {
///         version: String = "1.0.0",
///         exit_code: i32 = 0,
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder {
    ($builder:ident => $target:ident { $( $field:ident : $ty:ty = $default:expr ),+ $(,)? }) => {
        #[cfg(any(test, feature = "test-support"))]
        #[derive(Debug, Clone)]
        pub struct $builder {
            inner: $target,
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.inner.$field = value.into();
                    self
                }
            )+

            pub fn build(self) -> $target {
                self.inner
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            /// A builder seeded with test defaults.
            pub fn builder() -> $builder {
                $builder { inner: $target { $( $field: $default.into(), )+ } }
            }
        }
    };
}
