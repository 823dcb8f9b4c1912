use super::Edge;

/// A four-sided shape described by its left and right vertical edges.
///
/// [`Rectangle`](super::Rectangle) is the only implementor today. The
/// bounding accessors are derived from the two edges, so a new shape kind
/// only has to expose its edges.
pub trait Parallelogram {
    fn left(&self) -> &Edge;

    fn right(&self) -> &Edge;

    fn min_x(&self) -> f64 {
        self.left().x()
    }

    fn max_x(&self) -> f64 {
        self.right().x()
    }

    fn min_y(&self) -> f64 {
        self.left().lower.y
    }

    fn max_y(&self) -> f64 {
        self.left().upper.y
    }

    fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    fn height(&self) -> f64 {
        self.left().length()
    }
}
