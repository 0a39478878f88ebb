/*
 * Copyright (c) 2022 Martin Mills <daggerbot@gmail.com>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::num::FpCategory;

use half::f16;

/// Trait for color components. Color types defined in this crate are composed of one or more
/// components, or channels, with the same type. This trait is for working with values of that type.
///
/// Integer components range from 0 to the type's maximum value. For unsigned integers, this
/// includes all possible values.
///
/// Floating point components range from 0 to 1. In some situations, values outside this range may
/// be allowed, particularly in intermediate calculations. The `saturate()` and `wrap()` functions
/// can be used to ensure a value within this range.
pub trait Component {
    /// Returns the maximum component value.
    ///
    /// Note that this may not necessarily be the greatest value that the type can represent. For
    /// integer types, this is the type's maximum value. For floating point types, this is `1.0`.
    fn max() -> Self;

    /// Returns the minimum component value.
    ///
    /// Note that this may not necessarily be the least value that the type can represent. For
    /// integer types, this is `0`. For floating point types, this is `0.0`.
    fn min() -> Self;

    /// Saturates the value between `min()` and `max()`.
    fn saturate(self) -> Self;

    /// Wraps the value between `min()` and `max()`.
    fn wrap(self) -> Self;
}

impl Component for bool {
    fn max() -> bool { true }
    fn min() -> bool { false }
    fn saturate(self) -> bool { self }
    fn wrap(self) -> bool { self }
}

/// Converts losslessly from another color component type.
pub trait FromComponent<T>: FromComponentLossy<T> {
    fn from_component(other: T) -> Self;
}

impl<T> FromComponent<T> for T {
    fn from_component(other: T) -> T {
        other
    }
}

impl<'a, T: Copy> FromComponent<&'a T> for T {
    fn from_component(other: &'a T) -> T {
        *other
    }
}

impl FromComponent<f32> for f64 {
    fn from_component(other: f32) -> f64 {
        other as f64
    }
}

/// Converts losslessly into another color component type.
pub trait IntoComponent<T>: IntoComponentLossy<T> {
    fn into_component(self) -> T;
}

impl<F, T: FromComponent<F>> IntoComponent<T> for F {
    fn into_component(self) -> T {
        T::from_component(self)
    }
}

/// Converts lossily (or losslessly) from another color component type.
pub trait FromComponentLossy<T> {
    fn from_component_lossy(other: T) -> Self;
}

impl<T, F: IntoComponent<T>> FromComponentLossy<F> for T {
    fn from_component_lossy(other: F) -> T {
        other.into_component()
    }
}

impl FromComponentLossy<f64> for f32 {
    fn from_component_lossy(other: f64) -> f32 {
        other as f32
    }
}

/// Converts lossily (or losslessly) into another color component type.
pub trait IntoComponentLossy<T> {
    fn into_component_lossy(self) -> T;
}

impl<F, T: FromComponentLossy<F>> IntoComponentLossy<T> for F {
    fn into_component_lossy(self) -> T {
        T::from_component_lossy(self)
    }
}

//--------------------------------------------------------------------------------------------------

macro_rules! impl_uint {
    ($($type:ident),*) => { $(
        impl Component for $type {
            fn max() -> $type { $type::MAX }
            fn min() -> $type { 0 }
            fn saturate(self) -> $type { self }
            fn wrap(self) -> $type { self }
        }
    )* };
}

macro_rules! impl_float {
    ($($type:ident),*) => { $(
        impl Component for $type {
            fn max() -> $type { 1.0 }
            fn min() -> $type { 0.0 }

            fn saturate(self) -> $type {
                match self.classify() {
                    FpCategory::Nan => $type::NAN,
                    FpCategory::Zero => 0.0,
                    _ => if self < 0.0 { 0.0 } else if self >= 1.0 { 1.0 } else { self },
                }
            }

            fn wrap(self) -> $type {
                match self.classify() {
                    FpCategory::Nan => $type::NAN,
                    FpCategory::Zero => 0.0,
                    _ => if self < 0.0 { 1.0 + self.fract() } else { self.fract() },
                }
            }
        }
    )* };
}

macro_rules! impl_upscale_cast {
    { $($from:ident * $scale:tt -> $to:ident;)* } => { $(
        impl FromComponent<$from> for $to {
            fn from_component(other: $from) -> $to { other as $to * $scale }
        }

        impl<'a> FromComponent<&'a $from> for $to {
            fn from_component(other: &'a $from) -> $to { *other as $to * $scale }
        }
    )* };
}

macro_rules! impl_downscale_cast {
    { $($from:ident >> $shift:tt -> $to:ident;)* } => { $(
        impl FromComponentLossy<$from> for $to {
            fn from_component_lossy(other: $from) -> $to { (other >> $shift) as $to }
        }

        impl<'a> FromComponentLossy<&'a $from> for $to {
            fn from_component_lossy(other: &'a $from) -> $to { (*other >> $shift) as $to }
        }
    )* };
}

macro_rules! impl_int_to_float {
    { $($to:ident <- $($from:ident),*;)* } => { $( $(
        impl FromComponentLossy<$from> for $to {
            fn from_component_lossy(other: $from) -> $to { other as $to / $from::MAX as $to }
        }

        impl<'a> FromComponentLossy<&'a $from> for $to {
            fn from_component_lossy(other: &'a $from) -> $to { *other as $to / $from::MAX as $to }
        }
    )* )* };
}

macro_rules! impl_float_to_int {
    { $($from:ident -> $($to:ident),*;)* } => { $( $(
        impl FromComponentLossy<$from> for $to {
            fn from_component_lossy(other: $from) -> $to { (other * $to::MAX as $from) as $to }
        }

        impl<'a> FromComponentLossy<&'a $from> for $to {
            fn from_component_lossy(other: &'a $from) -> $to { (*other * $to::MAX as $from) as $to }
        }
    )* )* };
}

macro_rules! impl_from_to_bool {
    ($($ty:ty),*) => { $(
        impl FromComponent<bool> for $ty {
            fn from_component(other: bool) -> $ty {
                if other { Component::max() } else { Component::min() }
            }
        }

        impl FromComponentLossy<$ty> for bool {
            fn from_component_lossy(other: $ty) -> bool {
                other > <$ty as Component>::min()
            }
        }
    )* };
}

macro_rules! impl_int {
    ($($type:ident),*) => { $(
        impl Component for $type {
            fn max() -> $type { $type::MAX }
            fn min() -> $type { 0 }
            fn saturate(self) -> $type { if self < 0 { 0 } else { self } }
            fn wrap(self) -> $type {
                (self as i64).rem_euclid($type::MAX as i64 + 1) as $type
            }
        }
    )* };
}

/// Lossy rescale between two integer component types whose maximum values don't share a clean
/// bit-doubling relationship (signed ranges, or a signed/unsigned pairing). `impl_upscale_cast!`
/// and `impl_downscale_cast!` can't be used here because `iN::MAX` isn't a power of two minus one
/// times the smaller type's max, the way `u8::MAX * 0x0101 == u16::MAX` is.
macro_rules! impl_int_rescale {
    { $($from:ident <-> $to:ident;)* } => { $(
        impl FromComponentLossy<$from> for $to {
            fn from_component_lossy(other: $from) -> $to {
                let other = if other < 0 { 0 } else { other as i64 };
                (other * $to::MAX as i64 / $from::MAX as i64) as $to
            }
        }

        impl FromComponentLossy<$to> for $from {
            fn from_component_lossy(other: $to) -> $from {
                let other = if other < 0 { 0 } else { other as i64 };
                (other * $from::MAX as i64 / $to::MAX as i64) as $from
            }
        }
    )* };
}

impl Component for f16 {
    fn max() -> f16 { f16::from_f32(1.0) }
    fn min() -> f16 { f16::from_f32(0.0) }

    fn saturate(self) -> f16 {
        if self.is_nan() {
            f16::NAN
        } else {
            f16::from_f32(self.to_f32().saturate())
        }
    }

    fn wrap(self) -> f16 {
        if self.is_nan() {
            f16::NAN
        } else {
            f16::from_f32(self.to_f32().wrap())
        }
    }
}

impl_uint!(u8, u16, u32, u64, u128);
impl_int!(i8, i16, i32);
impl_float!(f32, f64);

impl_int_rescale! {
    i8 <-> i16;
    i8 <-> i32;
    i16 <-> i32;
}

impl_upscale_cast! {
    u8 * 0x0101 -> u16;
    u8 * 0x01010101 -> u32;
    u8 * 0x01010101_01010101 -> u64;
    u8 * 0x01010101_01010101_01010101_01010101 -> u128;
    u16 * 0x00010001 -> u32;
    u16 * 0x00010001_00010001 -> u64;
    u16 * 0x00010001_00010001_00010001_00010001 -> u128;
    u32 * 0x00000001_00000001 -> u64;
    u32 * 0x00000001_00000001_00000001_00000001 -> u128;
    u64 * 0x00000000_00000001_00000000_00000001 -> u128;
}
impl_downscale_cast! {
    u16 >> 8 -> u8;
    u32 >> 24 -> u8;
    u32 >> 16 -> u16;
    u64 >> 56 -> u8;
    u64 >> 48 -> u16;
    u64 >> 32 -> u32;
    u128 >> 120 -> u8;
    u128 >> 112 -> u16;
    u128 >> 96 -> u32;
    u128 >> 64 -> u64;
}
impl_int_to_float! {
    f32 <- u8, u16, u32, u64, u128, i8, i16, i32;
    f64 <- u8, u16, u32, u64, u128, i8, i16, i32;
}
impl_float_to_int! {
    f32 -> u8, u16, u32, u64, u128, i8, i16, i32;
    f64 -> u8, u16, u32, u64, u128, i8, i16, i32;
}

/// `half::f16` doesn't support bare `as` casts, so its conversions are written out directly rather
/// than through the `impl_int_to_float!`/`impl_float_to_int!` macros.
macro_rules! impl_f16_int {
    ($($int:ident),*) => { $(
        impl FromComponentLossy<$int> for f16 {
            fn from_component_lossy(other: $int) -> f16 {
                let numer = if other < 0 { 0i64 } else { other as i64 };
                f16::from_f32(numer as f32 / $int::MAX as f32)
            }
        }

        impl FromComponentLossy<f16> for $int {
            fn from_component_lossy(other: f16) -> $int {
                (other.to_f32() * $int::MAX as f32) as $int
            }
        }
    )* };
}

impl_f16_int!(u8, u16, u32, u64, u128, i8, i16, i32);

impl FromComponentLossy<f32> for f16 {
    fn from_component_lossy(other: f32) -> f16 {
        f16::from_f32(other)
    }
}

impl FromComponentLossy<f16> for f32 {
    fn from_component_lossy(other: f16) -> f32 {
        other.to_f32()
    }
}

impl FromComponentLossy<f64> for f16 {
    fn from_component_lossy(other: f64) -> f16 {
        f16::from_f64(other)
    }
}

impl FromComponentLossy<f16> for f64 {
    fn from_component_lossy(other: f16) -> f64 {
        other.to_f64()
    }
}

impl_from_to_bool!(u8, u16, u32, u64, u128, i8, i16, i32, f32, f64);

impl FromComponent<bool> for f16 {
    fn from_component(other: bool) -> f16 {
        if other { Component::max() } else { Component::min() }
    }
}

impl FromComponentLossy<f16> for bool {
    fn from_component_lossy(other: f16) -> bool {
        other > <f16 as Component>::min()
    }
}
