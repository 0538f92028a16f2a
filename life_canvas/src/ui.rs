// ui.rs - Canvas and Restart button

use eframe::egui;
use egui::{Sense, Vec2};

use crate::LifeApp;
use crate::render;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance once per tick delivered since the last frame
        for _ in 0..self.scheduler.drain_ticks() {
            self.life.tick();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    self.restart();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas = Vec2::new(self.config.width as f32, self.config.height as f32);
            let (response, painter) = ui.allocate_painter(canvas, Sense::hover());

            if let Some(grid) = self.life.frame() {
                render::paint_grid(
                    &painter,
                    response.rect.min,
                    grid,
                    self.config.cell_size,
                    &self.palette,
                );
            }
        });
    }
}
