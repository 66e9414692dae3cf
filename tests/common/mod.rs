// One `#[test]` per (operation, element, lanes) instantiation for backend `$b`.
macro_rules! conformance_tests {
    (@each $b:ty; $group:ident; $($name:ident: $t:ty, $n:literal);* $(;)?) => {
        mod $group {
            use super::*;
            $(
                mod $name {
                    use super::*;
                    conformance_tests!(@$group $b, $t, $n);
                }
            )*
        }
    };
    (@movement $b:ty, $t:ty, $n:literal) => {
        #[test]
        fn broadcast() {
            pass(checks::broadcast::<$b, $t, $n>());
        }
        #[test]
        fn load_store() {
            pass(checks::load_store::<$b, $t, $n>());
        }
        #[test]
        fn aligned_load_store() {
            pass(checks::aligned_load_store::<$b, $t, $n>());
        }
        #[test]
        fn partial_load_store() {
            pass(checks::partial_load_store::<$b, $t, $n>());
        }
    };
    (@arithmetic $b:ty, $t:ty, $n:literal) => {
        #[test]
        fn add() {
            pass(checks::add::<$b, $t, $n>());
        }
        #[test]
        fn subtract() {
            pass(checks::subtract::<$b, $t, $n>());
        }
    };
    (@multiply $b:ty, $t:ty, $n:literal) => {
        #[test]
        fn multiply() {
            pass(checks::multiply::<$b, $t, $n>());
        }
    };
    (@ordered $b:ty, $t:ty, $n:literal) => {
        #[test]
        fn min() {
            pass(checks::min::<$b, $t, $n>());
        }
        #[test]
        fn max() {
            pass(checks::max::<$b, $t, $n>());
        }
        #[test]
        fn horizontal_min() {
            pass(checks::horizontal_min::<$b, $t, $n>());
        }
        #[test]
        fn horizontal_max() {
            pass(checks::horizontal_max::<$b, $t, $n>());
        }
    };
    ($b:ty) => {
        use lanewise::conformance::checks;
        use lanewise::{bf16, f16};

        fn pass(outcome: Result<(), lanewise::conformance::Mismatch>) {
            if let Err(mismatch) = outcome {
                panic!("{mismatch}");
            }
        }

        conformance_tests!(@each $b; movement;
            u8x64: u8, 64; s8x64: i8, 64; s16x32: i16, 32; f16x32: f16, 32; bf16x32: bf16, 32;
            f32x16: f32, 16; s32x16: i32, 16; u8x32: u8, 32; s8x32: i8, 32; f16x16: f16, 16;
            bf16x16: bf16, 16; u8x16: u8, 16; s8x16: i8, 16; f32x4: f32, 4; s32x4: i32, 4);
        conformance_tests!(@each $b; arithmetic;
            u8x64: u8, 64; s8x64: i8, 64; s16x32: i16, 32; f32x16: f32, 16; s32x16: i32, 16);
        conformance_tests!(@each $b; multiply; s16x32: i16, 32; f32x16: f32, 16; s32x16: i32, 16);
        conformance_tests!(@each $b; ordered;
            u8x64: u8, 64; s8x64: i8, 64; s16x32: i16, 32; f32x16: f32, 16; s32x16: i32, 16);

        mod fma {
            use super::*;
            #[test]
            fn f32x16() {
                pass(checks::fma::<$b, f32, 16>());
            }
        }

        mod extract {
            use super::*;
            #[test]
            fn s32x16_to_s32x4() {
                pass(checks::extract::<$b, i32, 16, 4>());
            }
            #[test]
            fn f32x16_to_f32x4() {
                pass(checks::extract::<$b, f32, 16, 4>());
            }
            #[test]
            fn s8x64_to_s8x16() {
                pass(checks::extract::<$b, i8, 64, 16>());
            }
            #[test]
            fn u8x64_to_u8x16() {
                pass(checks::extract::<$b, u8, 64, 16>());
            }
            #[test]
            fn bf16x32_to_bf16x16() {
                pass(checks::extract::<$b, bf16, 32, 16>());
            }
            #[test]
            fn f16x32_to_f16x16() {
                pass(checks::extract::<$b, f16, 32, 16>());
            }
            #[test]
            fn s8x64_to_s8x32() {
                pass(checks::extract::<$b, i8, 64, 32>());
            }
            #[test]
            fn u8x64_to_u8x32() {
                pass(checks::extract::<$b, u8, 64, 32>());
            }
        }

        mod concat {
            use super::*;
            #[test]
            fn bf16x16() {
                pass(checks::concat_extract::<$b, bf16, 16, 32>());
            }
            #[test]
            fn f16x16() {
                pass(checks::concat_extract::<$b, f16, 16, 32>());
            }
            #[test]
            fn s8x32() {
                pass(checks::concat_extract::<$b, i8, 32, 64>());
            }
            #[test]
            fn u8x32() {
                pass(checks::concat_extract::<$b, u8, 32, 64>());
            }
            #[test]
            fn s8x16() {
                pass(checks::concat::<$b, i8, 16, 32>());
            }
            #[test]
            fn u8x16() {
                pass(checks::concat::<$b, u8, 16, 32>());
            }
        }

        mod convert {
            use super::*;
            #[test]
            fn s32x16_to_s8x16() {
                pass(checks::convert::<$b, i32, i8, 16>());
            }
            #[test]
            fn s32x16_to_u8x16() {
                pass(checks::convert::<$b, i32, u8, 16>());
            }
            #[test]
            fn f32x16_to_f16x16() {
                pass(checks::convert::<$b, f32, f16, 16>());
            }
            #[test]
            fn f32x16_to_bf16x16() {
                pass(checks::convert::<$b, f32, bf16, 16>());
            }
            #[test]
            fn pair_s32x16_to_s8x32() {
                pass(checks::convert_pair::<$b, i32, i8, 16, 32>());
            }
            #[test]
            fn pair_s32x16_to_u8x32() {
                pass(checks::convert_pair::<$b, i32, u8, 16, 32>());
            }
            #[test]
            fn f16x16_to_f32x16() {
                pass(checks::convert::<$b, f16, f32, 16>());
            }
            #[test]
            fn bf16x16_to_f32x16() {
                pass(checks::convert::<$b, bf16, f32, 16>());
            }
            #[test]
            fn s8x16_to_s32x16() {
                pass(checks::convert::<$b, i8, i32, 16>());
            }
            #[test]
            fn u8x16_to_s32x16() {
                pass(checks::convert::<$b, u8, i32, 16>());
            }
        }
    };
}
