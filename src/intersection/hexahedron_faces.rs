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

use crate::{
    error::Result,
    geometry::{
        hexahedron::Hexahedron,
        plane::Plane,
        point::{Point, Point3},
        quadrilateral::Quadrilateral,
        ray::Ray,
        segment::Segment,
    },
    intersection::result::IntersectionResult,
    kernel::predicates::points_same_side_of_plane,
    numeric::scalar::Scalar,
};

/// The six faces of a [`Hexahedron`], named by their vertices in
/// boundary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexahedronFace {
    Abcd,
    Efgh,
    Abhe,
    Bcgh,
    Adfe,
    Cdfg,
}

impl HexahedronFace {
    pub const ALL: [HexahedronFace; 6] = [
        HexahedronFace::Abcd,
        HexahedronFace::Efgh,
        HexahedronFace::Abhe,
        HexahedronFace::Bcgh,
        HexahedronFace::Adfe,
        HexahedronFace::Cdfg,
    ];

    /// Positions of the face's vertices in [`Hexahedron::vertices`].
    pub const fn indices(self) -> [usize; 4] {
        match self {
            HexahedronFace::Abcd => [0, 1, 2, 3],
            HexahedronFace::Efgh => [4, 5, 6, 7],
            HexahedronFace::Abhe => [0, 1, 7, 4],
            HexahedronFace::Bcgh => [1, 2, 6, 7],
            HexahedronFace::Adfe => [0, 3, 5, 4],
            HexahedronFace::Cdfg => [2, 3, 5, 6],
        }
    }

    /// A vertex off the face, on the interior side of its plane.
    pub const fn reference_vertex(self) -> usize {
        match self {
            HexahedronFace::Abcd => 4,
            HexahedronFace::Efgh => 0,
            HexahedronFace::Abhe => 2,
            HexahedronFace::Bcgh => 0,
            HexahedronFace::Adfe => 2,
            HexahedronFace::Cdfg => 0,
        }
    }
}

impl<T: Scalar> Hexahedron<T> {
    pub fn face(&self, face: HexahedronFace) -> Quadrilateral<T, 3> {
        let v = self.vertices();
        let [i, j, k, l] = face.indices();
        Quadrilateral::new(&v[i], &v[j], &v[k], &v[l])
    }

    pub fn faces(&self) -> impl Iterator<Item = (HexahedronFace, Quadrilateral<T, 3>)> + '_ {
        HexahedronFace::ALL
            .into_iter()
            .map(move |face| (face, self.face(face)))
    }

    /// Supporting planes in [`HexahedronFace::ALL`] order.
    pub fn face_planes(&self) -> Result<[Plane<T, 3>; 6]> {
        let mut planes = [Plane::zero(); 6];
        for (slot, (_, quad)) in planes.iter_mut().zip(self.faces()) {
            *slot = quad.plane()?;
        }
        Ok(planes)
    }

    /// Closed containment: the point must not be separated from the solid
    /// by any face plane.
    pub fn contains_point(&self, p: &Point3<T>) -> Result<bool> {
        let vertices = self.vertices();
        for (face, plane) in HexahedronFace::ALL.into_iter().zip(self.face_planes()?) {
            if !points_same_side_of_plane(p, &vertices[face.reference_vertex()], &plane) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn push_hits<T: Scalar>(hits: &mut Vec<Point3<T>>, result: IntersectionResult<Point3<T>>) {
    match result {
        IntersectionResult::One(p) => hits.push(p),
        IntersectionResult::Two(p, q) => hits.extend([p, q]),
        IntersectionResult::None | IntersectionResult::Infinite => {}
    }
}

impl<T: Scalar> Ray<T, 3> {
    pub fn intersects_hexahedron(&self, hex: &Hexahedron<T>) -> Result<bool> {
        Ok(self.hexahedron_intersection_points(hex)?.intersects())
    }

    /// Boundary hits merged over all faces, nearest first. A ray that
    /// crosses no face is `Infinite` when it starts inside.
    pub fn hexahedron_intersection_points(&self, hex: &Hexahedron<T>) -> Result<IntersectionResult<Point3<T>>> {
        self.require_direction()?;

        let mut hits = Vec::new();
        for (face, quad) in hex.faces() {
            let result = self.quadrilateral_intersection_points(&quad)?;
            log::trace!("ray vs face {:?}: {:?}", face, result.kind());
            push_hits(&mut hits, result);
        }

        if hits.is_empty() {
            return Ok(if hex.contains_point(&self.origin)? {
                IntersectionResult::Infinite
            } else {
                IntersectionResult::None
            });
        }
        Ok(IntersectionResult::nearest_two(&self.origin, hits))
    }
}

impl<T: Scalar> Segment<T, 3> {
    pub fn intersects_hexahedron(&self, hex: &Hexahedron<T>) -> Result<bool> {
        Ok(self.hexahedron_intersection_points(hex)?.intersects())
    }

    /// Boundary crossings ordered from `a`. A segment entirely inside the
    /// solid is `Infinite`.
    pub fn hexahedron_intersection_points(&self, hex: &Hexahedron<T>) -> Result<IntersectionResult<Point3<T>>> {
        if self.is_degenerate() {
            return Ok(if hex.contains_point(&self.a)? {
                IntersectionResult::One(self.a)
            } else {
                IntersectionResult::None
            });
        }

        let len = self.length();
        let ray = Ray::new(&self.a, &(self.direction() / len));
        let mut hits = Vec::new();
        push_hits(&mut hits, ray.hexahedron_intersection_points(hex)?);
        hits.retain(|p: &Point<T, 3>| self.a.distance_to(p).approx_le(&len));

        if hits.is_empty() {
            return Ok(if hex.contains_point(&self.a)? {
                IntersectionResult::Infinite
            } else {
                IntersectionResult::None
            });
        }
        Ok(IntersectionResult::nearest_two(&self.a, hits))
    }
}
