use std::fmt::Debug;

use num_traits::Zero;

/// Element contract shared by every matrix type.
///
/// `Zero` supplies the additive identity used for zero-initialized storage
/// together with the `Add` implementation the addition protocol relies on.
/// The `'static` bound keeps boxed addition results free of borrows.
pub trait MatrixElement: Copy + Debug + PartialEq + Zero + 'static {
    /// Formats one element for grid rendering.
    fn render_cell(&self) -> String;
}

// Integer elements render in their natural decimal form.
macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                fn render_cell(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

// Float elements render with fixed one-digit precision, e.g. "2.0", "5.5".
macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                fn render_cell(&self) -> String {
                    format!("{:.1}", self)
                }
            }
        )*
    };
}

impl_int_element!(i32, i64, u32, u64);
impl_float_element!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::MatrixElement;

    #[test]
    fn test_int_render_cell() {
        assert_eq!(7_i32.render_cell(), "7");
        assert_eq!((-3_i64).render_cell(), "-3");
        assert_eq!(42_u64.render_cell(), "42");
    }

    #[test]
    fn test_float_render_cell_fixed_precision() {
        assert_eq!(1.5_f64.render_cell(), "1.5");
        assert_eq!(2.0_f32.render_cell(), "2.0");
        assert_eq!(5.55_f64.render_cell(), "5.5");
        assert_eq!(0.0_f64.render_cell(), "0.0");
    }
}
