//-
// Copyright (c) 2026, Jason Lingle
//
// This file is part of Pstscan.
//
// Pstscan is free software: you can  redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.
//
// Pstscan is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Pstscan. If not, see <http://www.gnu.org/licenses/>.

/// Declare an enumeration of the fields of one column set or struct type.
///
/// Each member gets a name, a column type, and a `PropSource`. The generated
/// type has `ALL` (every member, in declaration order), `FIELDS` (the
/// matching field definitions, usable as a struct type), and `source()`.
macro_rules! field_set {
    ($(#[$meta:meta])* pub enum $name:ident {
        $($variant:ident => $field:literal, $ty:expr, $source:expr;)*
    }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];
            pub const FIELDS: &'static [FieldDef] = &[
                $(FieldDef { name: $field, ty: $ty },)*
            ];

            pub fn field(self) -> &'static FieldDef {
                &Self::FIELDS[self as usize]
            }

            pub fn source(self) -> PropSource {
                match self {
                    $($name::$variant => $source,)*
                }
            }
        }
    };
}

/// Like `field_set!`, but for top-level columns, adding `def()` which tags
/// the column with its `ColumnKey` variant.
macro_rules! column_set {
    ($(#[$meta:meta])* pub enum $name:ident : $key:ident {
        $($body:tt)*
    }) => {
        field_set! {
            $(#[$meta])*
            pub enum $name { $($body)* }
        }

        impl $name {
            pub fn def(self) -> ColumnDef {
                let field = self.field();
                ColumnDef {
                    name: field.name,
                    ty: field.ty,
                    key: ColumnKey::$key(self),
                }
            }
        }
    };
}
