use earcutr::earcut;
use foundation::math::Vec2;

/// Triangulates a screen-space polygon (outer ring + holes) into a flat
/// triangle list (3 vertices per triangle).
///
/// Backends that cannot fill arbitrary polygons directly consume this
/// instead of `DrawCommand::FillPolygon` rings.
pub fn tessellate_polygon(rings: &[Vec<Vec2>]) -> Vec<Vec2> {
    let Some(outer) = rings.first() else {
        return Vec::new();
    };
    if outer.len() < 3 {
        return Vec::new();
    }

    // Flatten rings into earcut's coordinate layout + a parallel vertex
    // list. Also remove a closing duplicate point if present.
    let mut vertices: Vec<Vec2> = Vec::new();
    let mut coords: Vec<f64> = Vec::new();
    let mut hole_indices: Vec<usize> = Vec::new();

    for (ring_i, ring) in rings.iter().enumerate() {
        let mut ring_pts: Vec<Vec2> = ring.clone();
        drop_closing_duplicate(&mut ring_pts);
        if ring_pts.len() < 3 {
            continue;
        }

        if ring_i > 0 {
            hole_indices.push(vertices.len());
        }

        for p in ring_pts {
            coords.push(p.x);
            coords.push(p.y);
            vertices.push(p);
        }
    }

    if vertices.len() < 3 {
        return Vec::new();
    }

    let indices = match earcut(&coords, &hole_indices, 2) {
        Ok(ix) => ix,
        Err(_) => return Vec::new(),
    };

    let mut out: Vec<Vec2> = Vec::with_capacity(indices.len());
    for idx in indices {
        if let Some(v) = vertices.get(idx) {
            out.push(*v);
        }
    }
    out
}

fn drop_closing_duplicate(points: &mut Vec<Vec2>) {
    if points.len() >= 2 {
        let first = points[0];
        let last = *points.last().unwrap();
        if (first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9 {
            points.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::tessellate_polygon;
    use foundation::math::Vec2;

    #[test]
    fn square_becomes_two_triangles() {
        let ring = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let tris = tessellate_polygon(&[ring]);
        assert_eq!(tris.len(), 6);
    }

    #[test]
    fn closing_duplicate_is_ignored() {
        let ring = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 0.0),
        ];
        let tris = tessellate_polygon(&[ring]);
        assert_eq!(tris.len(), 3);
    }

    #[test]
    fn degenerate_input_is_empty() {
        assert!(tessellate_polygon(&[]).is_empty());
        assert!(tessellate_polygon(&[vec![Vec2::new(0.0, 0.0)]]).is_empty());
    }
}
