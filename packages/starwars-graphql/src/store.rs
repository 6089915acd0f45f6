//! In-memory fixture store.
//!
//! The store is injected into the schema as request-scoped data, so
//! resolvers and the connection pager can be exercised against fixtures
//! without any globals.

use crate::models::{
    Character, Droid, Episode, Human, Review, ReviewInput, SearchResult, Starship,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

const ALL_EPISODES: [Episode; 3] = [Episode::NewHope, Episode::Empire, Episode::Jedi];

fn human(
    id: &str,
    name: &str,
    friend_ids: &[&str],
    appears_in: &[Episode],
    home_planet: Option<&str>,
    height: Option<f64>,
    mass: Option<f64>,
    starship_ids: &[&str],
) -> Human {
    Human {
        id: id.to_string(),
        name: name.to_string(),
        friend_ids: friend_ids.iter().map(|id| id.to_string()).collect(),
        appears_in: appears_in.to_vec(),
        home_planet: home_planet.map(String::from),
        height,
        mass,
        starship_ids: starship_ids.iter().map(|id| id.to_string()).collect(),
    }
}

fn droid(
    id: &str,
    name: &str,
    friend_ids: &[&str],
    appears_in: &[Episode],
    primary_function: &str,
) -> Droid {
    Droid {
        id: id.to_string(),
        name: name.to_string(),
        friend_ids: friend_ids.iter().map(|id| id.to_string()).collect(),
        appears_in: appears_in.to_vec(),
        primary_function: Some(primary_function.to_string()),
    }
}

fn starship(id: &str, name: &str, length: f64) -> Starship {
    Starship {
        id: id.to_string(),
        name: name.to_string(),
        length: Some(length),
    }
}

pub struct Store {
    humans: HashMap<String, Human>,
    droids: HashMap<String, Droid>,
    starships: HashMap<String, Starship>,
    reviews: RwLock<HashMap<Episode, Vec<Review>>>,
}

impl Store {
    pub fn new() -> Self {
        let humans = [
            human(
                "1000",
                "Luke Skywalker",
                &["1002", "1003", "2000", "2001"],
                &ALL_EPISODES,
                Some("Tatooine"),
                Some(1.72),
                Some(77.0),
                &["3001", "3003"],
            ),
            human(
                "1001",
                "Darth Vader",
                &["1004"],
                &ALL_EPISODES,
                Some("Tatooine"),
                Some(2.02),
                Some(136.0),
                &["3002"],
            ),
            human(
                "1002",
                "Han Solo",
                &["1000", "1003", "2001"],
                &ALL_EPISODES,
                None,
                Some(1.8),
                Some(80.0),
                &["3000", "3003"],
            ),
            human(
                "1003",
                "Leia Organa",
                &["1000", "1002", "2000", "2001"],
                &ALL_EPISODES,
                Some("Alderaan"),
                Some(1.5),
                Some(49.0),
                &[],
            ),
            human(
                "1004",
                "Wilhuff Tarkin",
                &["1001"],
                &[Episode::NewHope],
                None,
                Some(1.8),
                None,
                &[],
            ),
        ]
        .into_iter()
        .map(|human| (human.id.clone(), human))
        .collect();

        let droids = [
            droid(
                "2000",
                "C-3PO",
                &["1000", "1002", "1003", "2001"],
                &ALL_EPISODES,
                "Protocol",
            ),
            droid(
                "2001",
                "R2-D2",
                &["1000", "1002", "1003"],
                &ALL_EPISODES,
                "Astromech",
            ),
        ]
        .into_iter()
        .map(|droid| (droid.id.clone(), droid))
        .collect();

        let starships = [
            starship("3000", "Millenium Falcon", 34.37),
            starship("3001", "X-Wing", 12.5),
            starship("3002", "TIE Advanced x1", 9.2),
            starship("3003", "Imperial shuttle", 20.0),
        ]
        .into_iter()
        .map(|starship| (starship.id.clone(), starship))
        .collect();

        let reviews = HashMap::from([
            (
                Episode::NewHope,
                vec![Review {
                    episode: Some(Episode::NewHope),
                    stars: 5,
                    commentary: Some("This is a great movie?!?!".to_string()),
                }],
            ),
            (
                Episode::Empire,
                vec![
                    Review {
                        episode: Some(Episode::Empire),
                        stars: 4,
                        commentary: Some("This IS a great movie?".to_string()),
                    },
                    Review {
                        episode: Some(Episode::Empire),
                        stars: 1,
                        commentary: Some("This is NOT a great movie!".to_string()),
                    },
                ],
            ),
            (Episode::Jedi, vec![]),
        ]);

        Self {
            humans,
            droids,
            starships,
            reviews: RwLock::new(reviews),
        }
    }

    pub fn human(&self, id: &str) -> Option<Human> {
        self.humans.get(id).cloned()
    }

    pub fn droid(&self, id: &str) -> Option<Droid> {
        self.droids.get(id).cloned()
    }

    pub fn starship(&self, id: &str) -> Option<Starship> {
        self.starships.get(id).cloned()
    }

    /// Look up a character by id, tagging its kind exactly once.
    pub fn character(&self, id: &str) -> Option<Character> {
        self.human(id)
            .map(Character::Human)
            .or_else(|| self.droid(id).map(Character::Droid))
    }

    /// Luke is the hero of Episode V; Artoo is the hero otherwise.
    pub fn hero(&self, episode: Option<Episode>) -> Option<Character> {
        if episode == Some(Episode::Empire) {
            self.character("1000")
        } else {
            self.character("2001")
        }
    }

    pub async fn reviews(&self, episode: Episode) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .get(&episode)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn add_review(&self, episode: Episode, input: ReviewInput) -> Review {
        let review = Review {
            episode: Some(episode),
            stars: input.stars,
            commentary: input.commentary,
        };
        self.reviews
            .write()
            .await
            .entry(episode)
            .or_default()
            .push(review.clone());
        review
    }

    /// Case-insensitive substring search over every entity name. Results are
    /// ordered by id, since the backing maps have no iteration order.
    pub fn search(&self, text: Option<&str>) -> Vec<SearchResult> {
        let needle = text.unwrap_or_default().to_lowercase();
        let matches = |name: &str| name.to_lowercase().contains(&needle);

        let mut results: Vec<SearchResult> = self
            .humans
            .values()
            .filter(|human| matches(&human.name))
            .cloned()
            .map(SearchResult::Human)
            .chain(
                self.droids
                    .values()
                    .filter(|droid| matches(&droid.name))
                    .cloned()
                    .map(SearchResult::Droid),
            )
            .chain(
                self.starships
                    .values()
                    .filter(|starship| matches(&starship.name))
                    .cloned()
                    .map(SearchResult::Starship),
            )
            .collect();

        results.sort_by(|a, b| result_id(a).cmp(result_id(b)));
        results
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn result_id(result: &SearchResult) -> &str {
    match result {
        SearchResult::Human(human) => &human.id,
        SearchResult::Droid(droid) => &droid.id,
        SearchResult::Starship(starship) => &starship.id,
    }
}
