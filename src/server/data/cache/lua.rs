//! Lua scripts for the Redis movie cache

// Atomically replace the cached movie set
// Deletes every movie listed in the current index, then writes the new movies and index.
// Movies dropped from the set also lose their character set and character entries.
//
// KEYS[1]: sorted set key (movie index)
// ARGV[1]: movie key prefix, the movie id is appended to build each movie key and
//          `<prefix><id>:characters` is the movie's character set
// ARGV[2]: character key prefix, `<prefix><movie_id>:<character_id>` is a character key
// ARGV[3..]: repeating triples of movie id, score (release date), movie JSON
//
// Returns: number of movies written
pub static REPLACE_MOVIES_SCRIPT: &str = r#"
local index_key = KEYS[1]
local movie_prefix = ARGV[1]
local character_prefix = ARGV[2]

local retained = {}
for i = 3, #ARGV, 3 do
    retained[ARGV[i]] = true
end

local previous = redis.call('ZRANGE', index_key, 0, -1)
for _, movie_id in ipairs(previous) do
    redis.call('DEL', movie_prefix .. movie_id)

    if not retained[movie_id] then
        local set_key = movie_prefix .. movie_id .. ':characters'
        local character_ids = redis.call('SMEMBERS', set_key)
        for _, character_id in ipairs(character_ids) do
            redis.call('DEL', character_prefix .. movie_id .. ':' .. character_id)
        end
        redis.call('DEL', set_key)
    end
end
redis.call('DEL', index_key)

local written = 0
for i = 3, #ARGV, 3 do
    local movie_id = ARGV[i]
    redis.call('SET', movie_prefix .. movie_id, ARGV[i + 2])
    redis.call('ZADD', index_key, tonumber(ARGV[i + 1]), movie_id)
    written = written + 1
end

return written
"#;

// Atomically replace the cached characters of one movie
//
// KEYS[1]: set key holding the movie's character ids
// ARGV[1]: character key prefix for the movie, the character id is appended
// ARGV[2..]: repeating pairs of character id, character JSON
//
// Returns: number of characters written
pub static REPLACE_CHARACTERS_SCRIPT: &str = r#"
local set_key = KEYS[1]
local character_prefix = ARGV[1]

local previous = redis.call('SMEMBERS', set_key)
for _, character_id in ipairs(previous) do
    redis.call('DEL', character_prefix .. character_id)
end
redis.call('DEL', set_key)

local written = 0
for i = 2, #ARGV, 2 do
    local character_id = ARGV[i]
    redis.call('SET', character_prefix .. character_id, ARGV[i + 1])
    redis.call('SADD', set_key, character_id)
    written = written + 1
end

return written
"#;
