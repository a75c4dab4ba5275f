//! Colour tables.
//!
//! Import and render use different tables: walls are drawn brown but read
//! from grey, so a rendered frame re-imports with walls intact only because
//! unknown colours fall back to walls.

use evac_grid::CellType;
use image::Rgb;

pub const BLACK:      Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE:      Rgb<u8> = Rgb([255, 255, 255]);
pub const GREY:       Rgb<u8> = Rgb([128, 128, 128]);
pub const LIGHT_GREY: Rgb<u8> = Rgb([160, 160, 160]);
pub const RED:        Rgb<u8> = Rgb([255, 0, 0]);
pub const LIGHT_RED:  Rgb<u8> = Rgb([255, 102, 102]);
pub const GREEN:      Rgb<u8> = Rgb([0, 255, 0]);
pub const BROWN:      Rgb<u8> = Rgb([51, 25, 0]);
pub const LIGHT_PINK: Rgb<u8> = Rgb([255, 204, 204]);
pub const ORANGE:     Rgb<u8> = Rgb([255, 128, 0]);

/// Colour a cell type is drawn with.
pub fn color_for(kind: CellType) -> Rgb<u8> {
    match kind {
        CellType::Empty | CellType::PersonAppearance => WHITE,
        CellType::Wall                               => BROWN,
        CellType::Person | CellType::PersonAtExit    => RED,
        CellType::Exit                               => GREEN,
        CellType::Smoke                              => GREY,
        CellType::PersonWithSmoke                    => LIGHT_RED,
        CellType::ObstacleWithSmoke                  => LIGHT_GREY,
        CellType::Obstacle                           => ORANGE,
    }
}

/// Cell type a pixel colour encodes.  Anything unlisted is a wall.
pub fn kind_for(color: Rgb<u8>) -> CellType {
    match color {
        WHITE      => CellType::Empty,
        GREY       => CellType::Wall,
        RED        => CellType::Person,
        GREEN      => CellType::Exit,
        LIGHT_PINK => CellType::PersonAppearance,
        ORANGE     => CellType::Obstacle,
        LIGHT_GREY => CellType::ObstacleWithSmoke,
        _          => CellType::Wall,
    }
}

/// Jet colour map: `t = 0` is dark blue, `t = 1` dark red.
pub fn jet(t: f64) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let channel = |centre: f64| {
        let v = (1.5 - (4.0 * t - centre).abs()).clamp(0.0, 1.0);
        (v * 255.0).round() as u8
    };
    Rgb([channel(3.0), channel(2.0), channel(1.0)])
}
