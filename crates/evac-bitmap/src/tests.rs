//! Tests for evac-bitmap.

#[cfg(test)]
mod palette_tests {
    use evac_grid::CellType;
    use image::Rgb;

    use crate::palette::{self, color_for, jet, kind_for};

    #[test]
    fn import_table() {
        assert_eq!(kind_for(Rgb([255, 255, 255])), CellType::Empty);
        assert_eq!(kind_for(Rgb([128, 128, 128])), CellType::Wall);
        assert_eq!(kind_for(Rgb([255, 0, 0])), CellType::Person);
        assert_eq!(kind_for(Rgb([0, 255, 0])), CellType::Exit);
        assert_eq!(kind_for(Rgb([255, 204, 204])), CellType::PersonAppearance);
        assert_eq!(kind_for(Rgb([255, 128, 0])), CellType::Obstacle);
        assert_eq!(kind_for(Rgb([160, 160, 160])), CellType::ObstacleWithSmoke);
    }

    #[test]
    fn unknown_colours_are_walls() {
        assert_eq!(kind_for(Rgb([1, 2, 3])), CellType::Wall);
        assert_eq!(kind_for(Rgb([0, 0, 255])), CellType::Wall);
    }

    #[test]
    fn render_table() {
        assert_eq!(color_for(CellType::Empty), palette::WHITE);
        assert_eq!(color_for(CellType::PersonAppearance), palette::WHITE);
        assert_eq!(color_for(CellType::Wall), Rgb([51, 25, 0]));
        assert_eq!(color_for(CellType::PersonAtExit), palette::RED);
        assert_eq!(color_for(CellType::PersonWithSmoke), Rgb([255, 102, 102]));
        assert_eq!(color_for(CellType::Smoke), palette::GREY);
    }

    #[test]
    fn jet_endpoints() {
        assert_eq!(jet(0.0), Rgb([0, 0, 128]));
        assert_eq!(jet(0.5), Rgb([128, 255, 128]));
        assert_eq!(jet(1.0), Rgb([128, 0, 0]));
        assert_eq!(jet(-3.0), jet(0.0));
    }
}

#[cfg(test)]
mod import_tests {
    use evac_core::Position;
    use evac_grid::{CellType, GridError, Importer};
    use image::{Rgb, RgbImage};

    use crate::{BitmapError, BitmapImporter, grid_from_image, save};

    /// 3 wide, 2 high: white, green, red / grey, pink, blue.
    fn small_image() -> RgbImage {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(2, 0, Rgb([255, 0, 0]));
        img.put_pixel(0, 1, Rgb([128, 128, 128]));
        img.put_pixel(1, 1, Rgb([255, 204, 204]));
        img.put_pixel(2, 1, Rgb([0, 0, 255]));
        img
    }

    #[test]
    fn pixels_map_to_cells() {
        let grid = grid_from_image(&small_image()).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 3));
        assert_eq!(grid.kind(Position::new(0, 1)), CellType::Exit);
        assert_eq!(grid.kind(Position::new(0, 2)), CellType::Person);
        assert_eq!(grid.kind(Position::new(1, 1)), CellType::PersonAppearance);
        assert_eq!(grid.kind(Position::new(1, 2)), CellType::Wall);
    }

    #[test]
    fn empty_image_is_unreadable() {
        let err = grid_from_image(&RgbImage::new(0, 4)).unwrap_err();
        assert!(matches!(err, BitmapError::Unreadable(_)));
    }

    #[test]
    fn loads_from_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        save(&small_image(), &path).unwrap();

        let grid = BitmapImporter::from_path(&path).load().unwrap();
        assert_eq!(grid, grid_from_image(&small_image()).unwrap());
    }

    #[test]
    fn loads_from_bmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.bmp");
        save(&small_image(), &path).unwrap();
        let grid = BitmapImporter::from_path(&path).load().unwrap();
        assert_eq!(grid.kind(Position::new(0, 1)), CellType::Exit);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = BitmapImporter::from_path("/nonexistent/map.bmp").load().unwrap_err();
        assert!(matches!(err, GridError::Unreadable(_)));
    }

    #[test]
    fn garbage_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        std::fs::write(&path, b"not an image").unwrap();
        let err = BitmapImporter::from_path(&path).load().unwrap_err();
        assert!(matches!(err, GridError::Unreadable(_)));
    }
}

#[cfg(test)]
mod render_tests {
    use evac_core::Position;
    use evac_grid::text::parse_grid;
    use evac_grid::{DijkstraSolver, FieldSolver, Renderer};

    use crate::palette;
    use crate::{BitmapRenderer, DistanceHeatMap};

    #[test]
    fn cells_are_scaled_blocks() {
        let grid = parse_grid("#E.\n.P#").unwrap();
        let img = BitmapRenderer::default().render(&grid);
        assert_eq!(img.dimensions(), (30, 20));
        assert_eq!(*img.get_pixel(15, 5), palette::GREEN);
        assert_eq!(*img.get_pixel(19, 19), palette::RED);
        assert_eq!(*img.get_pixel(29, 0), palette::WHITE);
        assert_eq!(*img.get_pixel(0, 0), palette::BROWN);
    }

    #[test]
    fn zero_scale_draws_one_pixel_per_cell() {
        let grid = parse_grid("#E.\n.P#").unwrap();
        assert_eq!(BitmapRenderer::new(0).render(&grid).dimensions(), (3, 2));
    }

    #[test]
    fn heat_map_colours() {
        let mut grid = parse_grid("E..#.").unwrap();
        let exits = vec![Position::new(0, 0)];
        DijkstraSolver::default().recompute(&mut grid, &exits);

        let img = DistanceHeatMap::new(1).render(&grid);
        assert_eq!(*img.get_pixel(0, 0), palette::jet(1.0));
        assert_ne!(*img.get_pixel(1, 0), palette::BLACK);
        // Wall and the unreachable cell behind it.
        assert_eq!(*img.get_pixel(3, 0), palette::BLACK);
        assert_eq!(*img.get_pixel(4, 0), palette::BLACK);
    }

    #[test]
    fn far_cells_are_black() {
        assert_eq!(DistanceHeatMap::color(200.0), palette::BLACK);
        assert_eq!(DistanceHeatMap::color(f64::INFINITY), palette::BLACK);
        assert_ne!(DistanceHeatMap::color(199.0), palette::BLACK);
    }
}

#[cfg(test)]
mod sample_tests {
    use evac_core::Position;
    use evac_grid::{CellType, DijkstraSolver, FieldSolver, Renderer};

    use crate::samples::MIN_LENGTH;
    use crate::{BitmapError, BitmapRenderer, SampleKind, grid_from_image, sample};

    fn exits(kind: SampleKind, n: usize) -> Vec<Position> {
        sample(kind, n).unwrap().positions_of(CellType::Exit.into())
    }

    #[test]
    fn exit_placement() {
        assert_eq!(exits(SampleKind::SquareRoom, 20), [Position::new(0, 10)]);
        assert_eq!(
            exits(SampleKind::RoomWithBlock, 20),
            [Position::new(0, 10), Position::new(19, 10)]
        );
        assert_eq!(exits(SampleKind::ScatteredBlocks, 20), [Position::new(0, 0)]);
        assert_eq!(
            exits(SampleKind::WideExit, 20),
            [Position::new(0, 9), Position::new(0, 10), Position::new(0, 11)]
        );
    }

    #[test]
    fn border_is_closed_apart_from_exits() {
        for kind in SampleKind::ALL {
            let grid = sample(kind, 16).unwrap();
            for pos in grid.positions() {
                let edge = pos.row == 0 || pos.col == 0 || pos.row == 15 || pos.col == 15;
                if edge {
                    let k = grid.kind(pos);
                    assert!(k == CellType::Wall || k == CellType::Exit, "{kind} {pos} is {k}");
                }
            }
        }
    }

    #[test]
    fn block_fills_the_middle() {
        let grid = sample(SampleKind::RoomWithBlock, 20).unwrap();
        assert_eq!(grid.kind(Position::new(10, 10)), CellType::Wall);
        assert_eq!(grid.kind(Position::new(2, 2)), CellType::Empty);
    }

    #[test]
    fn every_open_cell_reaches_an_exit() {
        for kind in SampleKind::ALL {
            let mut grid = sample(kind, 24).unwrap();
            let exits = grid.positions_of(CellType::Exit.into());
            DijkstraSolver::default().recompute(&mut grid, &exits);
            for pos in grid.positions_of(CellType::Empty.into()) {
                assert!(grid.distance(pos).is_finite(), "{kind}: {pos} is cut off");
            }
        }
    }

    #[test]
    fn rendered_sample_imports_back() {
        for kind in SampleKind::ALL {
            let grid = sample(kind, 16).unwrap();
            let img = BitmapRenderer::new(1).render(&grid);
            assert_eq!(grid_from_image(&img).unwrap(), grid, "{kind}");
        }
    }

    #[test]
    fn too_small_is_rejected() {
        let err = sample(SampleKind::WideExit, MIN_LENGTH - 1).unwrap_err();
        assert!(matches!(err, BitmapError::SampleTooSmall { .. }));
    }

    #[test]
    fn names_parse() {
        for kind in SampleKind::ALL {
            assert_eq!(kind.to_string().parse::<SampleKind>(), Ok(kind));
        }
        assert!("spiral".parse::<SampleKind>().is_err());
    }
}
