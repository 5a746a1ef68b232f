/// Builds the Redis keys of the movie cache.
///
/// - `movie:<id>` movie JSON
/// - `movie:index` sorted set of movie ids scored by release date
/// - `character:<movie_id>:<character_id>` character JSON
/// - `movie:<movie_id>:characters` set of the movie's character ids
///
/// Every key carries the optional namespace as a `<namespace>:` prefix.
#[derive(Debug, Clone, Default)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    pub fn new(namespace: Option<&str>) -> Self {
        let prefix = match namespace {
            Some(namespace) if !namespace.is_empty() => format!("{}:", namespace),
            _ => String::new(),
        };

        Self { prefix }
    }

    pub fn movie(&self, movie_id: i64) -> String {
        format!("{}{}", self.movie_prefix(), movie_id)
    }

    pub fn movie_prefix(&self) -> String {
        format!("{}movie:", self.prefix)
    }

    pub fn movie_index(&self) -> String {
        format!("{}movie:index", self.prefix)
    }

    pub fn character(&self, movie_id: i64, character_id: i64) -> String {
        format!("{}{}", self.character_prefix(movie_id), character_id)
    }

    pub fn character_prefix(&self, movie_id: i64) -> String {
        format!("{}{}:", self.characters_prefix(), movie_id)
    }

    /// Prefix shared by the character keys of every movie
    pub fn characters_prefix(&self) -> String {
        format!("{}character:", self.prefix)
    }

    pub fn movie_characters(&self, movie_id: i64) -> String {
        format!("{}movie:{}:characters", self.prefix, movie_id)
    }
}
