#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use alf::config::AlfConfig;
    use alf::io;
    use alf::opt::alt_stack::{AltStackOptimizer, optimize_orientation};
    use alf::opt::baseline::BaselineOptimizer;
    use pallet_rs::entities::{Carton, Orientation, Pallet};
    use pallet_rs::util::assertions;

    fn instance(c: (f32, f32, f32), p: (f32, f32, f32)) -> (Carton, Pallet) {
        let carton = Carton::new(c.0, c.1, c.2).unwrap();
        let pallet = Pallet::new(p.0, p.1, p.2).unwrap();
        (carton, pallet)
    }

    #[test_case((20.0, 35.0, 40.0), (120.0, 100.0, 200.0), 84, 5, 0.875; "eur pallet")]
    #[test_case((130.0, 10.0, 10.0), (120.0, 100.0, 200.0), 120, 1, 0.65; "long thin carton")]
    #[test_case((30.0, 30.0, 30.0), (120.0, 100.0, 150.0), 60, 5, 0.9; "cube")]
    #[test_case((50.0, 40.0, 30.0), (110.0, 90.0, 180.0), 19, 3, 0.614_478_1; "odd remainder")]
    #[test_case((30.0, 20.0, 15.0), (120.0, 80.0, 144.0), 156, 7, 0.911_458_3; "eur half carton")]
    fn test_expected_totals(
        carton: (f32, f32, f32),
        pallet: (f32, f32, f32),
        total_cartons: usize,
        n_layers: usize,
        utilization: f32,
    ) {
        let (carton, pallet) = instance(carton, pallet);
        let solution = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .expect("instance is feasible");

        assert_eq!(solution.total_cartons, total_cartons);
        assert_eq!(solution.n_layers(), n_layers);
        assert!(approx_eq!(
            f32,
            solution.utilization,
            utilization,
            epsilon = 1e-6
        ));
        assert!(assertions::solution_is_feasible(&solution, &pallet));
    }

    #[test_case((20.0, 35.0, 40.0), (120.0, 100.0, 200.0); "eur pallet")]
    #[test_case((130.0, 10.0, 10.0), (120.0, 100.0, 200.0); "long thin carton")]
    #[test_case((30.0, 30.0, 30.0), (120.0, 100.0, 150.0); "cube")]
    #[test_case((50.0, 40.0, 30.0), (110.0, 90.0, 180.0); "odd remainder")]
    #[test_case((30.0, 20.0, 15.0), (120.0, 80.0, 144.0); "eur half carton")]
    fn test_orientation_dominance(carton: (f32, f32, f32), pallet: (f32, f32, f32)) {
        let (carton, pallet) = instance(carton, pallet);
        let best = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .expect("instance is feasible");

        for orientation in carton.orientations() {
            if let Some(candidate) = optimize_orientation(orientation, &pallet) {
                assert!(candidate.total_cartons <= best.total_cartons);
            }
        }
    }

    #[test_case((20.0, 35.0, 40.0), (120.0, 100.0, 200.0); "eur pallet")]
    #[test_case((130.0, 10.0, 10.0), (120.0, 100.0, 200.0); "long thin carton")]
    #[test_case((30.0, 30.0, 30.0), (120.0, 100.0, 150.0); "cube")]
    #[test_case((50.0, 40.0, 30.0), (110.0, 90.0, 180.0); "odd remainder")]
    #[test_case((30.0, 20.0, 15.0), (120.0, 80.0, 144.0); "eur half carton")]
    fn test_baseline_dominated(carton: (f32, f32, f32), pallet: (f32, f32, f32)) {
        let (carton, pallet) = instance(carton, pallet);
        let optimized = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .expect("instance is feasible");
        let baseline = BaselineOptimizer::new(carton, pallet)
            .solve()
            .expect("instance is feasible");

        // strip fills and support-aware search never cost primary-grid capacity
        assert!(optimized.total_cartons >= baseline.total_cartons);
    }

    #[test]
    fn test_baseline_expected_totals() {
        let (carton, pallet) = instance((20.0, 35.0, 40.0), (120.0, 100.0, 200.0));
        let baseline = BaselineOptimizer::new(carton, pallet).solve().unwrap();

        assert_eq!(baseline.total_cartons, 69);
        assert_eq!(baseline.n_layers(), 5);
        assert!(approx_eq!(f32, baseline.utilization, 0.805, epsilon = 1e-6));
    }

    #[test]
    fn test_deterministic() {
        let (carton, pallet) = instance((20.0, 35.0, 40.0), (120.0, 100.0, 200.0));
        let optimizer = AltStackOptimizer::new(carton, pallet, AlfConfig::default());

        let a = optimizer.solve().unwrap();
        let b = optimizer.solve().unwrap();

        assert_eq!(a.orientation, b.orientation);
        assert_eq!(a.total_cartons, b.total_cartons);
        assert_eq!(a.n_layers(), b.n_layers());
        for (la, lb) in a.layers.iter().zip(b.layers.iter()) {
            assert_eq!(la.placements, lb.placements);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (carton, pallet) = instance((50.0, 40.0, 30.0), (110.0, 90.0, 180.0));
        let sequential = AltStackOptimizer::new(
            carton,
            pallet,
            AlfConfig {
                parallel_orientations: false,
                ..AlfConfig::default()
            },
        )
        .solve()
        .unwrap();
        let parallel = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .unwrap();

        assert_eq!(sequential.orientation, parallel.orientation);
        assert_eq!(sequential.total_cartons, parallel.total_cartons);
    }

    #[test]
    fn test_tie_resolves_to_first_orientation() {
        // every orientation of this carton stacks exactly 500 cartons
        let (carton, pallet) = instance((10.0, 20.0, 10.0), (100.0, 100.0, 100.0));
        let solution = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .unwrap();

        assert_eq!(solution.total_cartons, 500);
        assert_eq!(solution.orientation, Orientation::new(10.0, 20.0, 10.0));
    }

    #[test]
    fn test_orientation_exceeding_height_is_rejected() {
        let (_, pallet) = instance((20.0, 35.0, 250.0), (120.0, 100.0, 200.0));
        assert!(optimize_orientation(Orientation::new(20.0, 35.0, 250.0), &pallet).is_none());
    }

    #[test]
    fn test_oversized_carton_has_no_layout() {
        // no rotation fits the footprint in any axis
        let (carton, pallet) = instance((130.0, 130.0, 130.0), (120.0, 100.0, 200.0));

        assert!(
            AltStackOptimizer::new(carton, pallet, AlfConfig::default())
                .solve()
                .is_none()
        );
        assert!(BaselineOptimizer::new(carton, pallet).solve().is_none());
    }

    #[test]
    fn test_monotonic_layer_heights() {
        let (carton, pallet) = instance((20.0, 35.0, 40.0), (120.0, 100.0, 200.0));
        let solution = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .unwrap();

        for (i, layer) in solution.layers.iter().enumerate() {
            assert_eq!(layer.index, i + 1);
            assert!(approx_eq!(
                f32,
                layer.z(),
                i as f32 * solution.orientation.h
            ));
        }
        assert!(solution.stack_height() <= pallet.max_height);
    }

    #[test]
    fn test_cli_parses_stacking_args() {
        use std::path::PathBuf;

        use alf::io::cli::Cli;
        use clap::{CommandFactory, Parser};

        let cli = Cli::try_parse_from([
            "alf",
            "-i",
            "assets/eur1.json",
            "-s",
            "solutions",
            "-l",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.input_file, PathBuf::from("assets/eur1.json"));
        assert_eq!(cli.solution_folder, PathBuf::from("solutions"));
        assert!(cli.config_file.is_none());
        assert_eq!(cli.log_level, log::LevelFilter::Debug);

        let about = Cli::command().get_about().unwrap().to_string();
        assert!(about.contains("pallet stacking"));
    }

    #[test]
    fn test_asset_instance_roundtrip() {
        let ext_instance = io::read_instance(Path::new("../assets/eur1.json")).unwrap();
        let (carton, pallet) = io::import(&ext_instance).unwrap();

        let solution = AltStackOptimizer::new(carton, pallet, AlfConfig::default())
            .solve()
            .unwrap();
        assert_eq!(solution.total_cartons, 156);

        let ext_solution = io::export(&solution, *alf::EPOCH);
        assert_eq!(ext_solution.total_cartons, 156);
        assert_eq!(ext_solution.n_layers, 7);
        assert_eq!(
            ext_solution
                .layers
                .iter()
                .map(|l| l.placements.len())
                .sum::<usize>(),
            156
        );
    }
}
