//! Instantiation tables: every `(operation, shape)` a backend must pass.
//!
//! Both backends share one list; [`Scalar`] implements every capability
//! generically, so it is checked on exactly the shapes the hardware backend
//! provides.

use half::{bf16, f16};

use super::{Case, Operation, checks};
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
use crate::simd::X86Avx512;
use crate::simd::Scalar;

macro_rules! instantiations {
    (@table $b:ty; [$($mt:ty, $mn:literal);*]; [$($ot:ty, $on:literal);*]) => {
        [
            // Data movement on every shape.
            $(
                Case::new::<$b, $mt, $mn>(Operation::Broadcast, checks::broadcast::<$b, $mt, $mn>),
                Case::new::<$b, $mt, $mn>(Operation::LoadStore, checks::load_store::<$b, $mt, $mn>),
                Case::new::<$b, $mt, $mn>(Operation::AlignedLoadStore, checks::aligned_load_store::<$b, $mt, $mn>),
                Case::new::<$b, $mt, $mn>(Operation::PartialLoadStore, checks::partial_load_store::<$b, $mt, $mn>),
            )*
            // Add / subtract.
            Case::new::<$b, u8, 64>(Operation::Add, checks::add::<$b, u8, 64>),
            Case::new::<$b, i8, 64>(Operation::Add, checks::add::<$b, i8, 64>),
            Case::new::<$b, i16, 32>(Operation::Add, checks::add::<$b, i16, 32>),
            Case::new::<$b, f32, 16>(Operation::Add, checks::add::<$b, f32, 16>),
            Case::new::<$b, i32, 16>(Operation::Add, checks::add::<$b, i32, 16>),
            Case::new::<$b, u8, 64>(Operation::Subtract, checks::subtract::<$b, u8, 64>),
            Case::new::<$b, i8, 64>(Operation::Subtract, checks::subtract::<$b, i8, 64>),
            Case::new::<$b, i16, 32>(Operation::Subtract, checks::subtract::<$b, i16, 32>),
            Case::new::<$b, f32, 16>(Operation::Subtract, checks::subtract::<$b, f32, 16>),
            Case::new::<$b, i32, 16>(Operation::Subtract, checks::subtract::<$b, i32, 16>),
            // Multiply.
            Case::new::<$b, i16, 32>(Operation::Multiply, checks::multiply::<$b, i16, 32>),
            Case::new::<$b, f32, 16>(Operation::Multiply, checks::multiply::<$b, f32, 16>),
            Case::new::<$b, i32, 16>(Operation::Multiply, checks::multiply::<$b, i32, 16>),
            // Min / max and their reductions.
            $(
                Case::new::<$b, $ot, $on>(Operation::Min, checks::min::<$b, $ot, $on>),
                Case::new::<$b, $ot, $on>(Operation::Max, checks::max::<$b, $ot, $on>),
                Case::new::<$b, $ot, $on>(Operation::HorizontalMin, checks::horizontal_min::<$b, $ot, $on>),
                Case::new::<$b, $ot, $on>(Operation::HorizontalMax, checks::horizontal_max::<$b, $ot, $on>),
            )*
            // Fused multiply-add.
            Case::new::<$b, f32, 16>(Operation::FusedMultiplyAdd, checks::fma::<$b, f32, 16>),
            // Extract.
            Case::new::<$b, i32, 16>(Operation::Extract, checks::extract::<$b, i32, 16, 4>).to::<i32, 4>(),
            Case::new::<$b, f32, 16>(Operation::Extract, checks::extract::<$b, f32, 16, 4>).to::<f32, 4>(),
            Case::new::<$b, i8, 64>(Operation::Extract, checks::extract::<$b, i8, 64, 16>).to::<i8, 16>(),
            Case::new::<$b, u8, 64>(Operation::Extract, checks::extract::<$b, u8, 64, 16>).to::<u8, 16>(),
            Case::new::<$b, bf16, 32>(Operation::Extract, checks::extract::<$b, bf16, 32, 16>).to::<bf16, 16>(),
            Case::new::<$b, f16, 32>(Operation::Extract, checks::extract::<$b, f16, 32, 16>).to::<f16, 16>(),
            Case::new::<$b, i8, 64>(Operation::Extract, checks::extract::<$b, i8, 64, 32>).to::<i8, 32>(),
            Case::new::<$b, u8, 64>(Operation::Extract, checks::extract::<$b, u8, 64, 32>).to::<u8, 32>(),
            // Concat; split again where the backend can extract the halves.
            Case::new::<$b, bf16, 16>(Operation::Concat, checks::concat_extract::<$b, bf16, 16, 32>).to::<bf16, 32>(),
            Case::new::<$b, f16, 16>(Operation::Concat, checks::concat_extract::<$b, f16, 16, 32>).to::<f16, 32>(),
            Case::new::<$b, i8, 32>(Operation::Concat, checks::concat_extract::<$b, i8, 32, 64>).to::<i8, 64>(),
            Case::new::<$b, u8, 32>(Operation::Concat, checks::concat_extract::<$b, u8, 32, 64>).to::<u8, 64>(),
            Case::new::<$b, i8, 16>(Operation::Concat, checks::concat::<$b, i8, 16, 32>).to::<i8, 32>(),
            Case::new::<$b, u8, 16>(Operation::Concat, checks::concat::<$b, u8, 16, 32>).to::<u8, 32>(),
            // Narrowing conversions.
            Case::new::<$b, i32, 16>(Operation::Convert, checks::convert::<$b, i32, i8, 16>).to::<i8, 16>(),
            Case::new::<$b, i32, 16>(Operation::Convert, checks::convert::<$b, i32, u8, 16>).to::<u8, 16>(),
            Case::new::<$b, f32, 16>(Operation::Convert, checks::convert::<$b, f32, f16, 16>).to::<f16, 16>(),
            Case::new::<$b, f32, 16>(Operation::Convert, checks::convert::<$b, f32, bf16, 16>).to::<bf16, 16>(),
            Case::new::<$b, i32, 16>(Operation::ConvertPair, checks::convert_pair::<$b, i32, i8, 16, 32>)
                .to::<i8, 32>(),
            Case::new::<$b, i32, 16>(Operation::ConvertPair, checks::convert_pair::<$b, i32, u8, 16, 32>)
                .to::<u8, 32>(),
            // Widening conversions.
            Case::new::<$b, f16, 16>(Operation::Convert, checks::convert::<$b, f16, f32, 16>).to::<f32, 16>(),
            Case::new::<$b, bf16, 16>(Operation::Convert, checks::convert::<$b, bf16, f32, 16>).to::<f32, 16>(),
            Case::new::<$b, i8, 16>(Operation::Convert, checks::convert::<$b, i8, i32, 16>).to::<i32, 16>(),
            Case::new::<$b, u8, 16>(Operation::Convert, checks::convert::<$b, u8, i32, 16>).to::<i32, 16>(),
        ]
    };
    ($b:ty) => {
        instantiations!(@table $b;
            [u8, 64; i8, 64; i16, 32; f16, 32; bf16, 32; f32, 16; i32, 16;
             u8, 32; i8, 32; f16, 16; bf16, 16; u8, 16; i8, 16; f32, 4; i32, 4];
            [u8, 64; i8, 64; i16, 32; f32, 16; i32, 16])
    };
}

/// Cases for the [`Scalar`] reference backend.
pub static SCALAR: &[Case] = &instantiations!(Scalar);

/// Cases for the [`X86Avx512`] backend.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
pub static X86_AVX512: &[Case] = &instantiations!(X86Avx512);

/// Cases for [`Native`](crate::Native).
pub static NATIVE: &[Case] = &instantiations!(crate::simd::Native);
