//! The drawing seam: primitive emissions with a material tag. The concrete
//! rendering backend lives outside this crate; tests and the demo use the
//! recording sink.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Material tag attached to every emitted primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Ballast ground strip and junction polygons.
    Ballast,
    /// Swept rail profiles and junction connectors.
    Rail,
    Sleeper,
}

/// One emitted primitive, as recorded by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    TriangleStrip {
        material: Material,
        vertices: Vec<Vec3>,
    },
    Polygon {
        material: Material,
        vertices: Vec<Vec3>,
    },
    OrientedBox {
        material: Material,
        origin: Vec3,
        right: Vec3,
        up: Vec3,
        back: Vec3,
    },
}

/// Accepts primitive emissions from the synthesis passes.
pub trait DrawSink {
    fn draw_triangle_strip(&mut self, material: Material, vertices: &[Vec3]);
    fn draw_polygon(&mut self, material: Material, vertices: &[Vec3]);
    fn draw_box(&mut self, material: Material, origin: Vec3, right: Vec3, up: Vec3, back: Vec3);
}

/// Records every emission in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub primitives: Vec<Primitive>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_count(&self, material: Material) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::TriangleStrip { material: m, .. } if *m == material))
            .count()
    }

    pub fn polygon_count(&self, material: Material) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { material: m, .. } if *m == material))
            .count()
    }

    pub fn box_count(&self, material: Material) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::OrientedBox { material: m, .. } if *m == material))
            .count()
    }
}

impl DrawSink for CollectingSink {
    fn draw_triangle_strip(&mut self, material: Material, vertices: &[Vec3]) {
        self.primitives.push(Primitive::TriangleStrip {
            material,
            vertices: vertices.to_vec(),
        });
    }

    fn draw_polygon(&mut self, material: Material, vertices: &[Vec3]) {
        self.primitives.push(Primitive::Polygon {
            material,
            vertices: vertices.to_vec(),
        });
    }

    fn draw_box(&mut self, material: Material, origin: Vec3, right: Vec3, up: Vec3, back: Vec3) {
        self.primitives.push(Primitive::OrientedBox {
            material,
            origin,
            right,
            up,
            back,
        });
    }
}
