//! Tests for seeded random reference layer generation

#[cfg(test)]
mod tests {
    use brickwork::layer::generate::{flip_window, random_layer};
    use brickwork::layer::{Grid, validate};
    use rand::{SeedableRng, rngs::StdRng};

    // Tests generated layers always validate across sizes and seeds
    // Verified by skipping the second write in flip_window
    #[test]
    fn test_generated_layers_validate() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (rows, cols) in [(2, 2), (2, 8), (4, 4), (6, 10), (10, 6)] {
                let Ok(layer) = random_layer(rows, cols, &mut rng) else {
                    unreachable!("even dimensions must generate");
                };
                assert_eq!(layer.dimensions(), (rows, cols));
                assert!(validate(&layer), "seed {seed} produced {layer:?}");
            }
        }
    }

    // Tests the same seed reproduces the same layer
    // Verified by seeding from entropy
    #[test]
    fn test_generation_is_reproducible() {
        let first = random_layer(8, 8, &mut StdRng::seed_from_u64(42)).ok();
        let second = random_layer(8, 8, &mut StdRng::seed_from_u64(42)).ok();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    // Tests identifiers are numbered by first appearance in row-major order
    // Verified by skipping renumbering
    #[test]
    fn test_identifiers_in_first_appearance_order() {
        let Ok(layer) = random_layer(6, 6, &mut StdRng::seed_from_u64(7)) else {
            unreachable!("even dimensions must generate");
        };

        let mut highest = 0;
        for (_, id) in layer.indexed_iter() {
            assert!(id <= highest + 1, "identifier {id} appeared before {}", highest + 1);
            highest = highest.max(id);
        }
        assert_eq!(layer.get(0, 0), Some(1));
        assert_eq!(highest, 18);
    }

    // Tests odd and zero dimensions are refused
    // Verified by removing the parity check
    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_layer(3, 4, &mut rng).is_err());
        assert!(random_layer(4, 5, &mut rng).is_err());
        assert!(random_layer(0, 4, &mut rng).is_err());
    }

    // Tests a window of two parallel bricks is rotated in both directions
    // Verified by writing the wrong identifier into the lower left cell
    #[test]
    fn test_flip_window_rotates_parallel_bricks() {
        let Ok(mut grid) = Grid::from_rows(&[vec![1, 1], vec![2, 2]]) else {
            unreachable!("rectangular rows must build a grid");
        };

        assert!(flip_window(&mut grid, 0, 0));
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![1, 2]]);

        assert!(flip_window(&mut grid, 0, 0));
        assert_eq!(grid.to_rows(), vec![vec![1, 1], vec![2, 2]]);
    }

    // Tests windows not made of two parallel bricks are left alone
    // Verified by dropping the distinct-identifier condition
    #[test]
    fn test_flip_window_ignores_other_windows() {
        let Ok(mut grid) = Grid::from_rows(&[vec![1, 2, 2], vec![1, 3, 3]]) else {
            unreachable!("rectangular rows must build a grid");
        };
        let before = grid.clone();

        assert!(!flip_window(&mut grid, 0, 0));
        assert!(!flip_window(&mut grid, 0, 2));
        assert_eq!(grid, before);
    }
}
