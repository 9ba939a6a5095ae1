use prism_ngin::{
    Vector3,
    config::{CameraConfig, EngineConfig, LightingConfig},
    data_structures::{light::PointLight, scene_graph::Scene, shared},
    logging::init_logging,
    pipelines::{configuration::ShaderConfiguration, manager::ShaderManager},
    render::FramebufferMap,
};

#[test]
fn defaults_match_the_documented_values() {
    let config = EngineConfig::default();
    assert_eq!(config.camera.translation_sensitivity, 0.05);
    assert_eq!(config.camera.rotation_sensitivity, 0.1);
    assert_eq!(config.camera.pitch_limit, 80.0);
    assert_eq!(config.lighting.max_point_lights, 16);
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        [camera]
        rotation_sensitivity = 0.2
        "#,
    )
    .unwrap();

    assert_eq!(
        config,
        EngineConfig {
            camera: CameraConfig {
                rotation_sensitivity: 0.2,
                ..CameraConfig::default()
            },
            lighting: LightingConfig::default(),
        }
    );
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn malformed_toml_is_rejected_with_context() {
    let err = EngineConfig::from_toml_str("camera = 5").unwrap_err();
    assert!(err.to_string().contains("Invalid engine configuration"));
}

#[test]
fn configuration_files_are_loaded_from_disk() {
    let path = std::env::temp_dir().join(format!("prism-ngin-{}.toml", std::process::id()));
    let config = EngineConfig {
        camera: CameraConfig {
            pitch_limit: 60.0,
            ..CameraConfig::default()
        },
        lighting: LightingConfig {
            max_point_lights: 4,
        },
    };
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    let loaded = EngineConfig::load(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.unwrap(), config);
}

#[test]
fn missing_file_names_the_path() {
    let err = EngineConfig::load("/definitely/not/here.toml").unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("/definitely/not/here.toml"), "{message}");
}

#[test]
fn scene_from_config_applies_camera_and_lighting() {
    let config = EngineConfig::from_toml_str(
        r#"
        [camera]
        translation_sensitivity = 1.5

        [lighting]
        max_point_lights = 1
        "#,
    )
    .unwrap();
    let mut scene = Scene::from_config(&config);

    assert_eq!(scene.lighting().max_point_lights, 1);
    assert_eq!(scene.active_camera().borrow().translation_sensitivity, 1.5);
    assert_eq!(scene.cameras().len(), 1);

    // exceeding the shader array size is only a warning
    for _ in 0..3 {
        scene.add_point_light(shared(PointLight::new(Vector3::new(1.0, 1.0, 1.0), 1.0)));
    }
    let mut configuration = ShaderConfiguration::new();
    scene
        .draw(&mut configuration, &mut ShaderManager::new(), &FramebufferMap::new())
        .unwrap();
    assert_eq!(configuration.get_uint("pointLight_count"), Some(3));
    assert!(configuration.get_vec3("pointLight_color[2]").is_some());
}

#[test]
fn logger_can_be_initialised_repeatedly() {
    init_logging(Some("prism_ngin=trace"));
    init_logging(None);
}
