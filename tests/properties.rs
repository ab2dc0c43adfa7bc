// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use geokern::geometry::{
    Circle, Cross3, Hexahedron, Plane, Point2, Point3, Quadrilateral2, Quadrilateral3, Ray2, Ray3, Segment2,
    Segment3, Sphere, Triangle2, Triangle3, Vector2, Vector3, VectorOps,
};
use geokern::intersection::IntersectionResult;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Values in [-50, 50], biased towards zero, round numbers and edge cases.
fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
        ],
        -50.0..=50.0,
    ]
}

fn arbitrary_point() -> impl Strategy<Value = Point3<f64>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn arbitrary_unit_vector() -> impl Strategy<Value = Vector3<f64>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
        .prop_filter("non-zero vector", |v| v.norm() > 1e-4)
        .prop_map(|v| v.normalized())
}

fn arbitrary_segment() -> impl Strategy<Value = Segment3<f64>> {
    (arbitrary_point(), arbitrary_point()).prop_map(|(a, b)| Segment3::new(&a, &b))
}

fn arbitrary_point_2d() -> impl Strategy<Value = Point2<f64>> {
    (scalar_strategy(), scalar_strategy()).prop_map(|(x, y)| Point2::new(x, y))
}

fn arbitrary_unit_vector_2d() -> impl Strategy<Value = Vector2<f64>> {
    (scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y)| Vector2::new(x, y))
        .prop_filter("non-zero vector", |v| v.norm() > 1e-4)
        .prop_map(|v| v.normalized())
}

/// Segments between 1e-7 and 1e-4 long, well above the tolerance.
fn short_segment_2d() -> impl Strategy<Value = Segment2<f64>> {
    (arbitrary_point_2d(), arbitrary_unit_vector_2d(), 1e-7..1e-4)
        .prop_map(|(a, dir, len)| Segment2::new(&a, &(a + dir * len)))
}

/// Two unit directions at an angle between 1e-6 and 1e-3 radians.
fn shallow_directions() -> impl Strategy<Value = (Vector2<f64>, Vector2<f64>)> {
    (arbitrary_unit_vector_2d(), 1e-6..1e-3, prop::bool::ANY).prop_map(|(u, angle, flip): (Vector2<f64>, f64, bool)| {
        let angle = if flip { -angle } else { angle };
        let w = u * angle.cos() + u.perp() * angle.sin();
        (u, w)
    })
}

fn proper_triangle_2d() -> impl Strategy<Value = Triangle2<f64>> {
    (arbitrary_point_2d(), arbitrary_point_2d(), arbitrary_point_2d())
        .prop_map(|(a, b, c)| Triangle2::new(&a, &b, &c))
        .prop_filter("proper triangle", |t| t.area() > 1e-2)
}

fn proper_triangle_3d() -> impl Strategy<Value = Triangle3<f64>> {
    (arbitrary_point(), arbitrary_point(), arbitrary_point())
        .prop_map(|(a, b, c)| Triangle3::new(&a, &b, &c))
        .prop_filter("proper triangle", |t| t.area() > 1e-2)
}

/// Parallelograms `a, b, b + c - a, c`, so always planar and convex.
fn parallelogram_3d() -> impl Strategy<Value = Quadrilateral3<f64>> {
    proper_triangle_3d().prop_map(|t| Quadrilateral3::new(&t.a, &t.b, &(t.b + (t.c - t.a)), &t.c))
}

fn parallelogram_2d() -> impl Strategy<Value = Quadrilateral2<f64>> {
    proper_triangle_2d().prop_map(|t| Quadrilateral2::new(&t.a, &t.b, &(t.b + (t.c - t.a)), &t.c))
}

fn no_duplicate_pair<const N: usize>(result: &IntersectionResult<geokern::geometry::Point<f64, N>>) -> bool {
    match result {
        IntersectionResult::Two(p, q) => p != q,
        _ => true,
    }
}

proptest! {
    #[test]
    fn min_distance_is_symmetric(s1 in arbitrary_segment(), s2 in arbitrary_segment()) {
        let d12 = s1.min_distance(&s2);
        let d21 = s2.min_distance(&s1);
        prop_assert!((d12 - d21).abs() <= 1e-9 * (1.0 + d12));
    }

    #[test]
    fn segment_intersects_itself(s in arbitrary_segment()) {
        prop_assert!(s.intersects(&s));
        prop_assert!(s.intersection_point(&s).intersects());
    }

    #[test]
    fn ray_overlaps_itself(origin in arbitrary_point(), dir in arbitrary_unit_vector()) {
        let ray = Ray3::new(&origin, &dir);
        prop_assert_eq!(ray.ray_intersection_point(&ray).unwrap(), IntersectionResult::Infinite);
        prop_assert!(ray.contains_point(&origin).unwrap());
    }

    #[test]
    fn circle_overlaps_itself(x in scalar_strategy(), y in scalar_strategy(), r in 0.0..=20.0) {
        let c = Circle::new(&Point2::new(x, y), r);
        prop_assert_eq!(c.circle_intersection_points(&c), IntersectionResult::Infinite);
    }

    #[test]
    fn plane_contains_its_points(a in arbitrary_point(), b in arbitrary_point(), c in arbitrary_point()) {
        let (ab, ac) = (b - a, c - a);
        prop_assume!(ab.cross(&ac).norm() > 1e-3 * ab.norm() * ac.norm());
        let plane = Plane::from_points(&a, &b, &c).unwrap();
        for p in [a, b, c] {
            prop_assert!(plane.contains_point(&p));
        }
    }

    #[test]
    fn ray_plane_hit_lies_on_plane(
        origin in arbitrary_point(),
        dir in arbitrary_unit_vector(),
        normal in arbitrary_unit_vector(),
        offset in scalar_strategy(),
    ) {
        prop_assume!(dir.dot(&normal).abs() > 0.1);
        let plane = Plane::new(normal, offset);
        let ray = Ray3::new(&origin, &dir);
        match ray.plane_intersection_point(&plane).unwrap() {
            IntersectionResult::One(p) => prop_assert!(plane.signed_distance(&p).abs() < 1e-8),
            IntersectionResult::None => {
                prop_assert!(ray.reversed().plane_intersection_point(&plane).unwrap().intersects())
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn orb_hits_are_never_duplicated(
        origin in arbitrary_point(),
        dir in arbitrary_unit_vector(),
        center in arbitrary_point(),
        radius in 0.0..=30.0,
    ) {
        let sphere = Sphere::new(&center, radius);
        let ray = Ray3::new(&origin, &dir);
        prop_assert!(no_duplicate_pair(&ray.orb_intersection_points(&sphere).unwrap()));

        let seg = Segment3::new(&origin, &(origin + dir * 10.0));
        prop_assert!(no_duplicate_pair(&seg.orb_intersection_points(&sphere)));
    }

    #[test]
    fn merged_hits_are_never_duplicated_in_space(
        origin in arbitrary_point(),
        dir in arbitrary_unit_vector(),
        other in arbitrary_segment(),
        tri in proper_triangle_3d(),
        quad in parallelogram_3d(),
    ) {
        let ray = Ray3::new(&origin, &dir);
        prop_assert!(no_duplicate_pair(&ray.segment_intersection_point(&other).unwrap()));
        prop_assert!(no_duplicate_pair(&ray.triangle_intersection_points(&tri).unwrap()));
        prop_assert!(no_duplicate_pair(&ray.quadrilateral_intersection_points(&quad).unwrap()));

        let cube = Hexahedron::from_center_and_lengths(&Point3::new(0.0, 0.0, 0.0), 10.0, 10.0, 10.0);
        prop_assert!(no_duplicate_pair(&ray.hexahedron_intersection_points(&cube).unwrap()));
        let seg = Segment3::new(&origin, &(origin + dir * 20.0));
        prop_assert!(no_duplicate_pair(&seg.hexahedron_intersection_points(&cube).unwrap()));
    }

    #[test]
    fn merged_hits_are_never_duplicated_in_the_plane(
        origin in arbitrary_point_2d(),
        dir in arbitrary_unit_vector_2d(),
        tri in proper_triangle_2d(),
        quad in parallelogram_2d(),
    ) {
        let ray = Ray2::new(&origin, &dir);
        prop_assert!(no_duplicate_pair(&ray.triangle_intersection_points(&tri).unwrap()));
        prop_assert!(no_duplicate_pair(&ray.quadrilateral_intersection_points(&quad).unwrap()));

        let seg = Segment2::new(&origin, &(origin + dir * 30.0));
        prop_assert!(no_duplicate_pair(&seg.triangle_intersection_points(&tri).unwrap()));
        prop_assert!(no_duplicate_pair(&seg.quadrilateral_intersection_points(&quad).unwrap()));
    }

    #[test]
    fn short_segments_cross_their_bisector(short in short_segment_2d()) {
        let mid = short.center();
        let normal = short.direction().normalized().perp();
        let bisector = Segment2::new(&(mid - normal), &(mid + normal));

        prop_assert!(!short.is_degenerate());
        prop_assert!(short.min_distance(&bisector) < 1e-9);
        prop_assert_eq!(short.intersection_point(&bisector), IntersectionResult::One(mid));

        let ray = Ray2::new(&(mid - normal), &normal);
        prop_assert_eq!(ray.segment_intersection_point(&short).unwrap(), IntersectionResult::One(mid));
    }

    #[test]
    fn shallow_crossings_are_found(
        center in arbitrary_point_2d(),
        (u, w) in shallow_directions(),
        reach in 1.0..10.0,
    ) {
        let s1 = Segment2::new(&(center - u * reach), &(center + u * reach));
        let s2 = Segment2::new(&(center - w * reach), &(center + w * reach));
        prop_assert!(s1.min_distance(&s2) < 1e-9);
        let hit = s1.intersection_point(&s2);
        prop_assert!(matches!(hit, IntersectionResult::One(_)), "got {:?}", hit);

        let r1 = Ray2::new(&(center - u * reach), &u);
        let r2 = Ray2::new(&(center - w * reach), &w);
        prop_assert!(matches!(r1.ray_intersection_point(&r2).unwrap(), IntersectionResult::One(_)));
        prop_assert!(matches!(r1.segment_intersection_point(&s2).unwrap(), IntersectionResult::One(_)));
    }

    #[test]
    fn grazing_a_cube_corner_touches_once(
        a in 0.1f64..1.0,
        b in 0.1..1.0,
        c in 0.1..1.0,
        back in 0.1..5.0,
    ) {
        // Enters the x slab exactly where it leaves the y and z slabs.
        let cube = Hexahedron::<f64>::unit_cube();
        let corner = Point3::new(0.5, 0.5, 0.5);
        let dir = Vector3::new(-a, b, c).normalized();
        let ray = Ray3::new(&(corner - dir * back), &dir);
        prop_assert_eq!(ray.hexahedron_intersection_points(&cube).unwrap(), IntersectionResult::One(corner));

        let seg = Segment3::new(&ray.origin, &ray.point_at(2.0 * back));
        prop_assert_eq!(seg.hexahedron_intersection_points(&cube).unwrap(), IntersectionResult::One(corner));
    }

    #[test]
    fn grazing_a_cube_edge_touches_once(
        a in 0.1f64..1.0,
        b in 0.1..1.0,
        z in -0.4..0.4,
        back in 0.1..5.0,
    ) {
        let cube = Hexahedron::<f64>::unit_cube();
        let on_edge = Point3::new(0.5, 0.5, z);
        let dir = Vector3::new(-a, b, 0.0).normalized();
        let ray = Ray3::new(&(on_edge - dir * back), &dir);
        prop_assert_eq!(ray.hexahedron_intersection_points(&cube).unwrap(), IntersectionResult::One(on_edge));
    }
}

#[test]
fn random_points_in_triangles_are_contained() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let mut point = || {
            Point3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            )
        };
        let (a, b, c) = (point(), point(), point());
        let tri = Triangle3::new(&a, &b, &c);
        if tri.area() < 1.0 {
            continue;
        }

        let u: f64 = rng.random_range(0.0..1.0);
        let v: f64 = rng.random_range(0.0..1.0 - u);
        let inside = a + (b - a) * u + (c - a) * v;
        assert!(tri.contains_point(&inside).unwrap());

        let lifted = inside + tri.normal().normalized();
        assert!(!tri.contains_point(&lifted).unwrap());
    }
}

#[test]
fn random_rays_leave_the_cube_once() {
    let cube = Hexahedron::<f64>::unit_cube();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let origin = Point3::new(
            rng.random_range(-0.4..0.4),
            rng.random_range(-0.4..0.4),
            rng.random_range(-0.4..0.4),
        );
        let dir = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if dir.norm() < 0.1 {
            continue;
        }
        assert!(cube.contains_point(&origin).unwrap());

        let ray = Ray3::new(&origin, &dir.normalized());
        let Some(exit) = ray.hexahedron_intersection_points(&cube).unwrap().first().copied() else {
            panic!("ray from {origin:?} never leaves the cube");
        };
        let on_boundary = (0..3).any(|i| (exit[i].abs() - 0.5).abs() < 1e-9);
        assert!(on_boundary, "exit {exit:?} is not on a face");
    }
}
