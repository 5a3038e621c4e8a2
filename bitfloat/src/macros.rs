/// Implements a binary operator on [`Float`](crate::Float) for every
/// owned/borrowed combination, forwarding to a body over two references.
macro_rules! impl_float_binary_op {
    ($Trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<const E: usize, const M: usize> std::ops::$Trait<&Float<E, M>> for &Float<E, M> {
            type Output = Float<E, M>;

            #[inline]
            fn $method(self, rhs: &Float<E, M>) -> Float<E, M> {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl<const E: usize, const M: usize> std::ops::$Trait<Float<E, M>> for &Float<E, M> {
            type Output = Float<E, M>;

            #[inline]
            fn $method(self, rhs: Float<E, M>) -> Float<E, M> {
                let ($a, $b) = (self, &rhs);
                $body
            }
        }

        impl<const E: usize, const M: usize> std::ops::$Trait<&Float<E, M>> for Float<E, M> {
            type Output = Float<E, M>;

            #[inline]
            fn $method(self, rhs: &Float<E, M>) -> Float<E, M> {
                let ($a, $b) = (&self, rhs);
                $body
            }
        }

        impl<const E: usize, const M: usize> std::ops::$Trait<Float<E, M>> for Float<E, M> {
            type Output = Float<E, M>;

            #[inline]
            fn $method(self, rhs: Float<E, M>) -> Float<E, M> {
                let ($a, $b) = (&self, &rhs);
                $body
            }
        }
    };
}
