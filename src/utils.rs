/// Order two values with exactly one `<` comparison, smaller first.
///
/// When `a` and `b` are equal, `b` comes back first.
pub fn min_max<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a < b { (a, b) } else { (b, a) }
}
