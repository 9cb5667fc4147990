use std::collections::VecDeque;

use chrono::Timelike;
use egui::{Color32, Pos2, Vec2};

use super::{FrameCtx, Furniture, Sketch};
use crate::context::SketchContext;
use crate::utils::math;
use crate::views::TimeDisk;

const GRAVITY: f32 = 980.0;
const RESTITUTION: f32 = 0.25;
const AIR_DRAG: f32 = 1.2;
const MAX_BODIES: usize = 30;
const CULL_COUNT: usize = 20;

struct Body {
    disk: TimeDisk,
    pos: Pos2,
    vel: Vec2,
    angle: f32,
    angular_vel: f32,
}

/// 20240408 — every wall-clock second drops a time-stamped disk onto
/// the floor of the stage. Minute marks fall big, ten-second marks
/// medium, the rest small; old disks are culled in batches.
pub struct FallingTime {
    ctx: SketchContext,
    furniture: Option<Furniture>,
    bodies: VecDeque<Body>,
    last_second: Option<u32>,
}

impl FallingTime {
    pub fn new() -> Self {
        Self {
            ctx: SketchContext {
                code: "DESIGN SKETCH 20240408".into(),
                tech_title: "a gravity well for seconds".into(),
                title: "Time piles up if you let it".into(),
                ..SketchContext::default()
            },
            furniture: None,
            bodies: VecDeque::new(),
            last_second: None,
        }
    }

    fn spawn(&mut self, second: u32, stage_width: f32) {
        let radius = if second == 0 {
            150.0
        } else if second % 10 == 0 {
            100.0
        } else {
            35.0 + 50.0 * math::random_float(0.0, 1.0)
        };
        let font_size = 16.0 * radius / 100.0;

        let x = radius + (stage_width - radius * 2.0).max(0.0) * math::random_float(0.0, 1.0);
        self.bodies.push_back(Body {
            disk: TimeDisk::new(radius, font_size),
            pos: Pos2::new(x, -radius),
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: std::f32::consts::PI / 8.0 * math::random_float(0.0, 1.0),
        });

        if self.bodies.len() >= MAX_BODIES {
            log::debug!("culling {CULL_COUNT} oldest disks");
            self.bodies.drain(..CULL_COUNT);
        }
    }

    fn step(&mut self, dt: f32, stage_width: f32, stage_height: f32) {
        for body in &mut self.bodies {
            let r = body.disk.radius();
            body.vel.y += GRAVITY * dt;
            body.vel *= (1.0 - AIR_DRAG * dt).max(0.0);
            body.pos += body.vel * dt;
            body.angle += body.angular_vel * dt;

            // floor
            if body.pos.y > stage_height - r {
                body.pos.y = stage_height - r;
                body.vel.y = -body.vel.y * RESTITUTION;
                body.angular_vel *= 0.9;
                if body.vel.y.abs() < 10.0 {
                    body.vel.y = 0.0;
                }
            }
            // side walls
            if body.pos.x < r {
                body.pos.x = r;
                body.vel.x = -body.vel.x * RESTITUTION;
            } else if body.pos.x > stage_width - r {
                body.pos.x = stage_width - r;
                body.vel.x = -body.vel.x * RESTITUTION;
            }
        }
    }
}

impl Sketch for FallingTime {
    fn context(&self) -> &SketchContext {
        &self.ctx
    }

    fn setup(&mut self, grid: &mut crate::grid::GridView) {
        self.furniture = Some(Furniture::attach(&self.ctx, grid));
    }

    fn update(&mut self, frame: &mut FrameCtx<'_>) {
        let second = chrono::Local::now().second();
        if self.last_second != Some(second) {
            self.last_second = Some(second);
            self.spawn(second, frame.stage.width());
        }

        self.step(frame.dt, frame.stage.width(), frame.stage.height());

        let fill = self.ctx.title_color();
        for body in &self.bodies {
            body.disk.paint(
                frame.painter,
                frame.to_screen(body.pos),
                body.angle,
                fill,
                Color32::WHITE,
            );
        }

        if let Some(furniture) = &mut self.furniture {
            furniture.update(frame);
        }
    }
}
