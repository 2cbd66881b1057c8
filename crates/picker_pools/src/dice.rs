//! Die faces and their dot-pattern metadata.

/// Number of faces on a die. Faces are the integers `1..=FACES`.
pub const FACES: i64 = 6;

/// Returns the dot layout for a face as a list of grid areas.
///
/// Areas name the cells of a 3x3 grid: `a`/`c` the top corners, `d`/`b` the
/// bottom corners, `e`/`f` the middle sides, `g` the centre. This is
/// presentation metadata carried alongside the face value; the engine never
/// inspects it. Out-of-range faces yield an empty slice.
///
/// # Examples
///
/// ```
/// use picker_pools::dice::dot_pattern;
///
/// assert_eq!(dot_pattern(1), &['g']);
/// assert_eq!(dot_pattern(6).len(), 6);
/// assert!(dot_pattern(7).is_empty());
/// ```
pub fn dot_pattern(face: i64) -> &'static [char] {
    match face {
        1 => &['g'],
        2 => &['a', 'b'],
        3 => &['a', 'g', 'b'],
        4 => &['a', 'b', 'c', 'd'],
        5 => &['a', 'b', 'c', 'd', 'g'],
        6 => &['a', 'b', 'c', 'd', 'e', 'f'],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_counts_match_face_values() {
        for face in 1..=FACES {
            assert_eq!(dot_pattern(face).len() as i64, face);
        }
    }

    #[test]
    fn test_out_of_range_faces_are_empty() {
        assert!(dot_pattern(0).is_empty());
        assert!(dot_pattern(-1).is_empty());
        assert!(dot_pattern(7).is_empty());
    }
}
