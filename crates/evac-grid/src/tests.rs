//! Unit tests for evac-grid.
//!
//! All tests use hand-written text layouts so they run without image files.

#[cfg(test)]
mod helpers {
    use evac_core::Position;

    use crate::text::parse_grid;
    use crate::{CellType, Grid};

    /// 5×5 room, walls on the border, one exit at the top middle.
    pub const ROOM_5X5: &str = "
        ##E##
        #...#
        #...#
        #...#
        #####
    ";

    pub fn grid(text: &str) -> Grid {
        parse_grid(text).unwrap()
    }

    pub fn exits(grid: &Grid) -> Vec<Position> {
        grid.positions_of(CellType::Exit.into())
    }
}

// ── Cell types & groups ───────────────────────────────────────────────────────

#[cfg(test)]
mod cells {
    use crate::{CellSet, CellType};

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0u16;
        for t in CellType::ALL {
            assert_eq!(t.bit().count_ones(), 1, "{t} must occupy one bit");
            assert_eq!(seen & t.bit(), 0, "{t} overlaps another type");
            seen |= t.bit();
        }
        assert_eq!(CellSet(seen), CellSet::ALL);
    }

    #[test]
    fn movement_group_excludes_occupied_and_blocked() {
        for t in [CellType::Empty, CellType::Smoke, CellType::PersonAppearance, CellType::Exit] {
            assert!(CellSet::EMPTY.contains(t), "{t}");
        }
        for t in [
            CellType::Wall,
            CellType::Obstacle,
            CellType::Person,
            CellType::PersonWithSmoke,
            CellType::PersonAtExit,
            CellType::ObstacleWithSmoke,
        ] {
            assert!(!CellSet::EMPTY.contains(t), "{t}");
        }
    }

    #[test]
    fn traversable_is_empty_plus_people() {
        assert_eq!(CellSet::TRAVERSABLE, CellSet::EMPTY | CellSet::PEOPLE);
    }

    #[test]
    fn smoke_group() {
        assert!(CellType::PersonWithSmoke.is_in(CellSet::SMOKE));
        assert!(CellType::ObstacleWithSmoke.is_in(CellSet::SMOKE));
        assert!(!CellType::Obstacle.is_in(CellSet::SMOKE));
    }

    #[test]
    fn sensing_group_excludes_wall_and_exit() {
        assert!(!CellSet::SMOKE_SENSING.contains(CellType::Wall));
        assert!(!CellSet::SMOKE_SENSING.contains(CellType::Exit));
        assert!(CellSet::SMOKE_SENSING.contains(CellType::Obstacle));
        assert!(CellSet::SMOKE_SENSING.contains(CellType::PersonAtExit));
    }

    #[test]
    fn bitor_builds_sets() {
        let s = CellType::Wall | CellType::Exit;
        assert!(s.contains(CellType::Wall));
        assert!(s.contains(CellType::Exit));
        assert!(!s.contains(CellType::Empty));
    }
}

// ── Grid & neighbourhood ──────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use evac_core::Position;

    use super::helpers::{grid, ROOM_5X5};
    use crate::{CellSet, CellType, Grid, GridError};

    #[test]
    fn dimensions() {
        let g = grid(ROOM_5X5);
        assert_eq!((g.height(), g.width(), g.len()), (5, 5, 25));
        assert_eq!(g.kind(Position::new(0, 2)), CellType::Exit);
        assert_eq!(g.count(CellType::Empty.into()), 9);
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![CellType::Empty; 3], vec![CellType::Empty; 2]];
        assert!(matches!(Grid::from_rows(rows), Err(GridError::Unreadable(_))));
        assert!(Grid::from_rows(vec![]).is_err());
    }

    #[test]
    fn interior_has_eight_neighbours() {
        let g = Grid::new(3, 3);
        let n = g.neighborhood(Position::new(1, 1), CellSet::ALL);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Position::new(1, 1)));
    }

    #[test]
    fn corner_has_three_neighbours_no_wraparound() {
        let g = Grid::new(4, 4);
        let mut n = g.neighborhood(Position::new(0, 0), CellSet::ALL);
        n.sort();
        assert_eq!(n, vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]);

        let n = g.neighborhood(Position::new(3, 3), CellSet::ALL);
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn filter_by_group() {
        let g = grid(ROOM_5X5);
        // (1, 2) touches the exit above and five free interior cells.
        let free = g.free_neighbors(Position::new(1, 2));
        assert_eq!(free.len(), 6);
        assert!(free.contains(&Position::new(0, 2)));
        let walls = g.neighborhood(Position::new(1, 2), CellType::Wall.into());
        assert_eq!(walls.len(), 2);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_query_panics() {
        let g = Grid::new(2, 2);
        let _ = g.neighborhood(Position::new(2, 0), CellSet::ALL);
    }

    #[test]
    fn clone_is_deep() {
        let a = grid(ROOM_5X5);
        let mut b = a.clone();
        b.set_kind(Position::new(2, 2), CellType::Person);
        assert_eq!(a.kind(Position::new(2, 2)), CellType::Empty);
    }
}

// ── Text format ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use super::helpers::ROOM_5X5;
    use crate::text::parse_grid;
    use crate::{CellType, Importer, Renderer, TextImporter, TextRenderer};

    #[test]
    fn render_matches_input() {
        let g = parse_grid(ROOM_5X5).unwrap();
        let expected: String = ROOM_5X5
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| format!("{l}\n"))
            .collect();
        assert_eq!(TextRenderer.render(&g), expected);
    }

    #[test]
    fn unknown_chars_become_walls() {
        let g = TextImporter::new("?.\nE!").load().unwrap();
        assert_eq!(g.cells()[0].kind, CellType::Wall);
        assert_eq!(g.cells()[1].kind, CellType::Empty);
        assert_eq!(g.cells()[3].kind, CellType::Wall);
    }

    #[test]
    fn every_type_has_a_char() {
        for t in CellType::ALL {
            let c = crate::text::char_for(t);
            assert_eq!(crate::text::kind_for(c), t);
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = TextImporter::from_path("/definitely/not/here.txt").load();
        assert!(matches!(err, Err(crate::GridError::Unreadable(_))));
    }

    #[test]
    fn empty_input_is_unreadable() {
        assert!(TextImporter::new("\n   \n").load().is_err());
    }
}

// ── Distance field ────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use std::collections::VecDeque;

    use evac_core::Position;

    use super::helpers::{exits, grid, ROOM_5X5};
    use crate::{CellSet, CellType, CostModel, DijkstraSolver, FieldSolver, Grid};

    /// Plain hop-count BFS over traversable cells, from all exits.
    fn bfs(g: &Grid, exits: &[Position]) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; g.len()];
        let mut queue = VecDeque::new();
        for &e in exits {
            dist[e.index(g.width())] = 0.0;
            queue.push_back(e);
        }
        while let Some(p) = queue.pop_front() {
            let d = dist[p.index(g.width())];
            for n in g.neighborhood(p, CellSet::TRAVERSABLE) {
                let j = n.index(g.width());
                if dist[j].is_infinite() && g.kind(n) != CellType::Exit {
                    dist[j] = d + 1.0;
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    fn solve(g: &mut Grid, cost: CostModel) {
        let ex = exits(g);
        DijkstraSolver::new(cost).recompute(g, &ex);
    }

    #[test]
    fn open_room_is_chebyshev() {
        let mut g = grid(ROOM_5X5);
        solve(&mut g, CostModel::default());
        assert_eq!(g.distance(Position::new(0, 2)), 0.0);
        assert_eq!(g.distance(Position::new(1, 1)), 1.0);
        assert_eq!(g.distance(Position::new(2, 2)), 2.0);
        assert_eq!(g.distance(Position::new(3, 2)), 3.0);
        assert_eq!(g.distance(Position::new(3, 3)), 3.0);

        let exit = Position::new(0, 2);
        for pos in g.positions_of(CellSet::EMPTY) {
            assert_eq!(g.distance(pos), pos.chebyshev(exit) as f64, "at {pos}");
        }
    }

    #[test]
    fn walls_stay_infinite() {
        let mut g = grid(ROOM_5X5);
        solve(&mut g, CostModel::default());
        assert!(g.distance(Position::new(4, 4)).is_infinite());
        assert!(g.distance(Position::new(0, 0)).is_infinite());
    }

    #[test]
    fn enclosed_floor_is_unreachable() {
        let mut g = grid(
            "
            #E####
            #.#..#
            ###..#
            ######
            ",
        );
        solve(&mut g, CostModel::default());
        assert_eq!(g.distance(Position::new(1, 1)), 1.0);
        assert!(g.distance(Position::new(1, 3)).is_infinite());
        assert!(g.distance(Position::new(2, 4)).is_infinite());
    }

    #[test]
    fn occupied_cell_costs_more_to_pass_through() {
        // Corridor: E . P . .
        let mut g = grid("E.P..");
        solve(&mut g, CostModel::new(2.0, 3.0));
        assert_eq!(g.distance(Position::new(0, 1)), 1.0);
        // Standing on the person's cell is not penalised...
        assert_eq!(g.distance(Position::new(0, 2)), 2.0);
        // ...passing through it is.
        assert_eq!(g.distance(Position::new(0, 3)), 4.0);
        assert_eq!(g.distance(Position::new(0, 4)), 5.0);
    }

    #[test]
    fn smoke_and_person_factors_multiply() {
        let mut g = grid("E.pS.");
        solve(&mut g, CostModel::new(2.0, 3.0));
        assert_eq!(g.distance(Position::new(0, 2)), 2.0);
        assert_eq!(g.distance(Position::new(0, 3)), 2.0 + 6.0);
        assert_eq!(g.distance(Position::new(0, 4)), 8.0 + 3.0);
    }

    #[test]
    fn detour_around_smoke_when_cheaper() {
        let mut g = grid(
            "
            #####
            E.S.#
            #...#
            #####
            ",
        );
        solve(&mut g, CostModel::new(1.0, 10.0));
        // Via the smoke cell would be 2 + 10; the clear row below costs 3.
        assert_eq!(g.distance(Position::new(1, 3)), 3.0);
    }

    #[test]
    fn multiple_exits_take_nearest() {
        let mut g = grid("E.....E");
        solve(&mut g, CostModel::neutral());
        let d: Vec<f64> = (0..7).map(|c| g.distance(Position::new(0, c))).collect();
        assert_eq!(d, vec![0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn recompute_resets_previous_field() {
        let mut g = grid("E..");
        solve(&mut g, CostModel::neutral());
        g.set_kind(Position::new(0, 1), CellType::Wall);
        solve(&mut g, CostModel::neutral());
        assert!(g.distance(Position::new(0, 1)).is_infinite());
        assert!(g.distance(Position::new(0, 2)).is_infinite());
    }

    #[test]
    fn neutral_factors_match_bfs() {
        let mut g = grid(
            "
            ##E#######
            #..P..O..#
            #.OOO.S..#
            #..pP..O.E
            #A....O..#
            ##########
            ",
        );
        let ex = exits(&g);
        let expected = bfs(&g, &ex);
        solve(&mut g, CostModel::neutral());
        let got: Vec<f64> = g.cells().iter().map(|c| c.exit_distance).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn no_exits_everything_infinite() {
        let mut g = grid("...\n...");
        solve(&mut g, CostModel::default());
        assert!(g.cells().iter().all(|c| c.exit_distance.is_infinite()));
    }
}

// ── Distance field properties ─────────────────────────────────────────────────

#[cfg(test)]
mod distance_props {
    use proptest::prelude::*;

    use crate::{CellSet, CellType, CostModel, DijkstraSolver, FieldSolver, Grid};

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (2usize..8, 2usize..8).prop_flat_map(|(h, w)| {
            prop::collection::vec(prop::sample::select(CellType::ALL.to_vec()), h * w).prop_map(
                move |kinds| {
                    let rows = kinds.chunks(w).map(<[CellType]>::to_vec).collect();
                    Grid::from_rows(rows).unwrap()
                },
            )
        })
    }

    proptest! {
        /// Exits are 0, every finite cell satisfies the Bellman equation,
        /// and blocked cells are never reached.
        #[test]
        fn field_is_a_shortest_path_solution(mut g in arb_grid(), occ in 1.0f64..4.0, smoke in 1.0f64..4.0) {
            let cost = CostModel::new(occ, smoke);
            let exits = g.positions_of(CellType::Exit.into());
            DijkstraSolver::new(cost).recompute(&mut g, &exits);

            for (pos, cell) in g.iter() {
                let d = cell.exit_distance;
                prop_assert!(d >= 0.0);
                if cell.kind == CellType::Exit {
                    prop_assert_eq!(d, 0.0);
                    continue;
                }
                if !cell.is(CellSet::TRAVERSABLE) {
                    prop_assert!(d.is_infinite());
                    continue;
                }
                let best = g
                    .neighborhood(pos, CellSet::TRAVERSABLE)
                    .into_iter()
                    .map(|n| g.distance(n) + cost.accrual(g.kind(n)))
                    .fold(f64::INFINITY, f64::min);
                if d.is_finite() {
                    prop_assert!((d - best).abs() < 1e-9, "{pos}: {d} vs {best}");
                } else {
                    prop_assert!(best.is_infinite());
                }
            }
        }
    }
}
