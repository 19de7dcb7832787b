use approx::{assert_abs_diff_eq, assert_relative_eq};
use physics_demos::config::{DemoConfig, ProjectileArgs, SpringArgs};
use physics_demos::demos::{
    BouncingBall, BouncingBallParams, Demo, Progress, SolarSystem, SolarSystemParams, Spring,
    SpringParams,
};
use physics_demos::model::Scene;
use physics_demos::runner::{Pacing, Runner};

/// A minute and a half of bouncing. The floor clamps, but the walls only flip the
/// velocity, so the ball can poke out by up to one step's worth of motion.
#[test]
fn bouncing_ball_stays_in_the_box() {
    let params = BouncingBallParams::default();
    let slack = params.velocity.abs().max() * params.dt + 1e-9;

    let mut scene = Scene::new();
    let mut demo = BouncingBall::new(params.clone(), &mut scene);
    let ball = demo.ball();

    let mut lowest_peak = f64::INFINITY;
    let mut prev_vy = 0.0;
    for _ in 0..9000 {
        assert_eq!(demo.step(&mut scene), Progress::Running);

        let pos = scene.get_body(ball).position();
        assert!(pos.y >= params.floor_offset);
        assert!(pos.x.abs() <= params.wall_x + slack, "x escaped: {}", pos.x);
        assert!(pos.z.abs() <= params.wall_z + slack, "z escaped: {}", pos.z);

        // Horizontal speed never changes magnitude
        let v = demo.velocity();
        assert_relative_eq!(v.x.abs(), 2.0);
        assert_relative_eq!(v.z.abs(), 1.0);

        if prev_vy > 0.0 && v.y <= 0.0 {
            lowest_peak = lowest_peak.min(pos.y);
        }
        prev_vy = v.y;
    }

    // Energy bleeds away on every bounce
    assert!(lowest_peak < 1.0, "lowest peak was {}", lowest_peak);
    assert!(scene.get_body(ball).trail().unwrap().len() > 1000);
}

#[test]
fn spring_settles_at_equilibrium() {
    let params = SpringParams::default();
    let equilibrium = params.equilibrium_y();
    assert_relative_eq!(equilibrium, 1.02, epsilon = 1e-12);

    let mut scene = Scene::new();
    let mut demo = Spring::new(params.clone(), &mut scene);
    let mass = demo.mass();
    let coil = demo.coil();

    // Starts above equilibrium, so the first swing overshoots below it
    let mut lowest = f64::INFINITY;
    for _ in 0..20_000 {
        demo.step(&mut scene);
        lowest = lowest.min(scene.get_body(mass).position().y);
    }
    assert!(lowest < equilibrium - 0.5);

    let pos = scene.get_body(mass).position();
    assert_abs_diff_eq!(pos.y, equilibrium, epsilon = 0.01);
    assert_abs_diff_eq!(demo.velocity().norm(), 0.0, epsilon = 0.01);

    // The coil always reaches from the ceiling to the mass
    let coil = scene.get_body(coil);
    let axis = coil.shape().axis().unwrap();
    assert_relative_eq!(coil.position() + axis, pos, epsilon = 1e-12);
}

#[test]
fn solar_system_planets_stay_on_their_circles() {
    let params = SolarSystemParams::default();
    let mut scene = Scene::new();
    let mut demo = SolarSystem::new(params.clone(), &mut scene);

    let steps = 500;
    for _ in 0..steps {
        demo.step(&mut scene);
    }
    let t = steps as f64 * params.dt;
    assert_relative_eq!(demo.time(), t, epsilon = 1e-9);

    let earth = scene.get_body(demo.earth()).position();
    let mars = scene.get_body(demo.mars()).position();
    assert_relative_eq!(earth, params.earth.position_at(t), epsilon = 1e-9);
    assert_relative_eq!(mars, params.mars.position_at(t), epsilon = 1e-9);
    assert_relative_eq!(earth.coords.norm(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(mars.coords.norm(), 4.5, epsilon = 1e-9);
}

#[test]
fn projectile_runs_to_completion() {
    let config = DemoConfig::Projectile(ProjectileArgs {
        speed: 20.0,
        angle: 45.0,
        drag: 0.02,
    });
    let mut runner = Runner::new(&config).unwrap();
    let summary = runner.run(Pacing::Unthrottled, Some(10_000));

    assert!(summary.finished);
    assert!(summary.frames < 300);
    assert!(runner.is_finished());
}

#[test]
fn endless_demos_stop_at_frame_limit() {
    for config in [DemoConfig::Shapes, DemoConfig::BouncingBall] {
        let mut runner = Runner::new(&config).unwrap();
        let summary = runner.run(Pacing::Unthrottled, Some(200));
        assert_eq!(summary.frames, 200);
        assert!(!summary.finished);
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let steep = DemoConfig::Projectile(ProjectileArgs {
        speed: 20.0,
        angle: 120.0,
        drag: 0.02,
    });
    assert!(Runner::new(&steep).is_err());

    let limp = DemoConfig::Spring(SpringArgs {
        stiffness: -1.0,
        mass: 1.0,
        natural_length: 3.0,
        damping: 0.1,
    });
    assert!(Runner::new(&limp).is_err());
}
