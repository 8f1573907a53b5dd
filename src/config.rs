use living_shapes_core::GalleryConfig;

/// Page defaults, with the data path and store key overridable at build time.
pub(crate) fn gallery_config() -> GalleryConfig {
    GalleryConfig::default().with_overrides(
        option_env!("LIVING_SHAPES_DATA_PATH").or(option_env!("TRUNK_PUBLIC_LIVING_SHAPES_DATA_PATH")),
        option_env!("LIVING_SHAPES_STORE_KEY").or(option_env!("TRUNK_PUBLIC_LIVING_SHAPES_STORE_KEY")),
    )
}
