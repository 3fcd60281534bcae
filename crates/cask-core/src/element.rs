//! Fixed-width element codec for the typed container helpers.
//!
//! Containers store raw bytes and never interpret them. [`Element`] is the
//! compile-time bridge: a type with a known byte width that can write
//! itself into a slot and read itself back out.

/// A value with a fixed byte representation.
///
/// `encode` and `decode` are only ever called with slices of exactly
/// [`WIDTH`](Element::WIDTH) bytes.
pub trait Element: Sized {
    /// Number of bytes one value occupies in a container slot.
    const WIDTH: usize;

    /// Write this value's bytes into `out`.
    fn encode(&self, out: &mut [u8]);

    /// Rebuild a value from `bytes`.
    fn decode(bytes: &[u8]) -> Self;
}

macro_rules! impl_element_for_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn encode(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn decode(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_element_for_primitive!(u8, u16, u32, u64, u128, usize);
impl_element_for_primitive!(i8, i16, i32, i64, i128, isize);
impl_element_for_primitive!(f32, f64);

impl<const N: usize> Element for [u8; N] {
    const WIDTH: usize = N;

    fn encode(&self, out: &mut [u8]) {
        out.copy_from_slice(self);
    }

    fn decode(bytes: &[u8]) -> Self {
        let mut raw = [0u8; N];
        raw.copy_from_slice(bytes);
        raw
    }
}
