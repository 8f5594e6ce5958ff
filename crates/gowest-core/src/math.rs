/// Adds two integers.
///
/// ```
/// use gowest_core::math::add;
///
/// assert_eq!(add(1, 2), 3);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::add;

    #[test]
    fn test_add() {
        assert_eq!(add(1, 2), 3);
    }

    #[test]
    fn test_add_is_not_four() {
        assert_ne!(add(1, 2), 4);
    }

    #[test]
    fn test_add_negative() {
        assert_eq!(add(-5, 3), -2);
    }
}
