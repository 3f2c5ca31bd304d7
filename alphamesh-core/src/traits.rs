//! Core traits for alphamesh

/// Read access to the alpha channel of a decoded image.
///
/// Implementations must answer `alpha_at` for every `x < width()` and
/// `y < height()` with a value in `[0, 1]`, and must not change while a
/// contour is being built.
pub trait PixelSource {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Alpha of the pixel at `(x, y)`
    fn alpha_at(&self, x: u32, y: u32) -> f32;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn alpha_at(&self, x: u32, y: u32) -> f32 {
        (**self).alpha_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlphaGrid;

    fn total_alpha<P: PixelSource>(source: P) -> f32 {
        (0..source.height())
            .flat_map(|y| (0..source.width()).map(move |x| (x, y)))
            .map(|(x, y)| source.alpha_at(x, y))
            .sum()
    }

    #[test]
    fn test_reference_forwards_to_source() {
        let grid = AlphaGrid::filled(3, 2, 0.5);
        let by_ref: &AlphaGrid = &grid;
        assert_eq!(by_ref.width(), 3);
        assert_eq!(by_ref.height(), 2);
        assert_eq!(total_alpha(&grid), 3.0);
    }
}
