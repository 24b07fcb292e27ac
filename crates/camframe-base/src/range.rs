/// Inclusive range check: `lower <= x && x <= upper`.
pub fn is_between<T: PartialOrd>(x: T, lower: T, upper: T) -> bool {
    lower <= x && x <= upper
}
