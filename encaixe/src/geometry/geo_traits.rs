/// Trait for geometric primitives that can collide with each other.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
