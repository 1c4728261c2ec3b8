//! Named field access for vector elements.
//!
//! [`Vector`] stores its elements as an array, but graphics code wants to write `v.x` and `v.y`.
//! Each supported length dereferences to a `#[repr(C)]` view struct with one public field per
//! element; since [`Vector`] is `#[repr(transparent)]` over `[T; N]`, the layouts match exactly.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($n:literal => $target:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $target<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Vector<T, N>` is `repr(transparent)` over `[T; N]`, which has the
                // same layout as the `repr(C)` view struct with N fields of type `T`.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(2 => XY);
view!(3 => XYZ);
view!(4 => XYZW);
