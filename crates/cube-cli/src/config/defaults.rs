use cubeio::core::io::cube::CubeMetadata;
use cubeio::core::io::geometry::DEFAULT_SYMBOL_WIDTH;

pub struct DefaultsConfig {
    pub title: String,
    pub comment: String,
    pub keep_comments: bool,
    pub symbol_width: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let [title, comment] = CubeMetadata::default().comments;
        Self {
            title,
            comment,
            keep_comments: false,
            symbol_width: DEFAULT_SYMBOL_WIDTH,
        }
    }
}
