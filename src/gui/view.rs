use std::collections::HashMap;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::{Isometry3, Point2, Translation3, Vector3};

use super::camera::ZoomableCamera;
use super::controller::Controller;
use super::renderer::CompoundRenderer;
use crate::math::geometry::{axial_placement, centered_placement, ArrowParts, Placement};
use crate::model::{Body, BodyID, Color, Scene, Shape};
use crate::runner::Runner;

/// Scene nodes standing in for one body.
enum BodyNodes {
    Solid(SceneNode),
    Arrow { shaft: SceneNode, head: SceneNode },
    // Drawn fresh every frame by the line renderer
    Lines,
}

pub struct View {
    body_nodes: HashMap<BodyID, BodyNodes>,
    camera: ZoomableCamera,
    renderer: CompoundRenderer,
}

impl View {
    pub fn new(runner: &Runner, window: &mut Window) -> Self {
        let scene = runner.scene();

        let background = scene.background();
        window.set_background_color(background.r, background.g, background.b);

        let mut body_nodes = HashMap::new();
        for (id, body) in scene.bodies() {
            body_nodes.insert(id, Self::create_body_nodes(window, body));
        }

        let mut view = View {
            body_nodes,
            camera: ZoomableCamera::new(&runner.demo().framing()),
            renderer: CompoundRenderer::new(),
        };
        view.update_scene_objects(scene);

        view
    }

    // Every primitive is created one unit across and then scaled to fit the body, so
    // shapes can be resized later without rebuilding them.
    fn create_body_nodes(window: &mut Window, body: &Body) -> BodyNodes {
        let color = body.color();
        let solid = |mut node: SceneNode| {
            node.set_color(color.r, color.g, color.b);
            node
        };

        match body.shape() {
            Shape::Sphere { .. } => BodyNodes::Solid(solid(window.add_sphere(0.5))),
            Shape::Cuboid { .. } => BodyNodes::Solid(solid(window.add_cube(1.0, 1.0, 1.0))),
            Shape::Cylinder { .. } => BodyNodes::Solid(solid(window.add_cylinder(0.5, 1.0))),
            Shape::Cone { .. } => BodyNodes::Solid(solid(window.add_cone(0.5, 1.0))),
            Shape::Arrow { .. } => BodyNodes::Arrow {
                shaft: solid(window.add_cylinder(0.5, 1.0)),
                head: solid(window.add_cone(0.5, 1.0)),
            },
            Shape::Helix { .. } => BodyNodes::Lines,
        }
    }

    pub fn update_scene_objects(&mut self, scene: &Scene) {
        for (id, body) in scene.bodies() {
            let nodes = match self.body_nodes.get_mut(&id) {
                Some(nodes) => nodes,
                None => continue,
            };

            let position = body.position();
            match (nodes, body.shape()) {
                (BodyNodes::Solid(node), Shape::Sphere { radius }) => {
                    let diameter = 2.0 * radius;
                    place_node(
                        node,
                        &centered_placement(&position, &Vector3::repeat(diameter)),
                    );
                }
                (BodyNodes::Solid(node), Shape::Cuboid { size }) => {
                    place_node(node, &centered_placement(&position, size));
                }
                (BodyNodes::Solid(node), Shape::Cylinder { axis, radius })
                | (BodyNodes::Solid(node), Shape::Cone { axis, radius }) => {
                    place_node(node, &axial_placement(&position, axis, *radius));
                }
                (BodyNodes::Arrow { shaft, head }, Shape::Arrow { axis, shaft_width }) => {
                    let parts = ArrowParts::new(axis.norm(), *shaft_width);
                    let direction = axis.normalize();
                    let shaft_axis = parts.shaft_length * direction;

                    place_node(
                        shaft,
                        &axial_placement(&position, &shaft_axis, parts.shaft_radius),
                    );
                    place_node(
                        head,
                        &axial_placement(
                            &(position + shaft_axis),
                            &(parts.head_length * direction),
                            parts.head_radius,
                        ),
                    );
                }
                _ => {}
            }
        }
    }

    // the big boy
    pub fn prerender_scene(
        &mut self,
        window: &mut Window,
        runner: &Runner,
        controller: &Controller,
    ) {
        let scene = runner.scene();

        for (_, body) in scene.bodies() {
            if let Shape::Helix {
                axis,
                radius,
                coils,
            } = body.shape()
            {
                self.renderer.draw_helix(&body.position(), axis, *radius, *coils, body.color());
            }

            if let Some(trail) = body.trail() {
                self.renderer.draw_path(trail.points(), body.trail_color());
            }
        }

        // Draw text
        let default_font = kiss3d::text::Font::default();
        let text_color = Color::WHITE.to_point();
        window.draw_text(
            &status_text(runner, controller),
            &Point2::origin(),
            60.0,
            &default_font,
            &text_color,
        );
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }
}

fn place_node(node: &mut SceneNode, placement: &Placement) {
    let transform = Isometry3::from_parts(
        Translation3::from(placement.center.coords),
        placement.rotation,
    );
    let transform: Isometry3<f32> = nalgebra::convert(transform);
    node.set_local_transformation(transform);

    let scale = &placement.scale;
    node.set_local_scale(scale.x as f32, scale.y as f32, scale.z as f32);
}

fn status_text(runner: &Runner, controller: &Controller) -> String {
    let state = if runner.is_finished() {
        "finished"
    } else if controller.is_paused() {
        "paused"
    } else {
        "running"
    };

    format!(
        "{} ({})
Time: {:.2} s
Steps/frame: {}
FPS: {:.0}",
        runner.demo().name(),
        state,
        runner.sim_time(),
        controller.steps_per_frame(),
        controller.fps(),
    )
}
