use base::Vec2;

/// Convex hull of `points` (Andrew's monotone chain).
///
/// Duplicates and collinear points on the hull edges are dropped, so the
/// result never has more points than the input. Vertices start at the
/// smallest `(x, y)` and are counter-clockwise in a y-up frame (clockwise on
/// screen).
pub fn convex_hull(points: &[Vec2<i32>]) -> Vec<Vec2<i32>> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| (p.x, p.y));
    sorted.dedup();
    if sorted.len() <= 2 {
        return sorted;
    }

    let mut lower: Vec<Vec2<i32>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && lower[lower.len() - 2].cross(lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Vec2<i32>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && upper[upper.len() - 2].cross(upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    // each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// The polygon drawn for a symbol boundary: the boundary itself when it has
/// at most 4 points, its convex hull otherwise.
pub fn display_polygon(boundary: &[Vec2<i32>]) -> Vec<Vec2<i32>> {
    if boundary.len() > 4 {
        convex_hull(boundary)
    } else {
        boundary.to_vec()
    }
}
