//! The Star Wars domain model, exposed through `async_graphql` derives.
//!
//! `Character` is a closed tagged variant over the entity kinds that can
//! appear in a friend list. The kind is decided once, when a record is
//! looked up out of the store, instead of being re-derived from the lookup
//! tables on every access.

use crate::store::Store;
use crate::util::{paginate, FriendsConnection};
use async_graphql::{Context, Enum, InputObject, Interface, Object, Result, SimpleObject, Union, ID};

const METERS_PER_FOOT: f64 = 3.28084;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Episode {
    #[graphql(name = "NEWHOPE")]
    NewHope,
    Empire,
    Jedi,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum LengthUnit {
    Meter,
    Foot,
}

fn convert_length(length: Option<f64>, unit: LengthUnit) -> Option<f64> {
    match unit {
        LengthUnit::Meter => length,
        LengthUnit::Foot => length.map(|meters| meters * METERS_PER_FOOT),
    }
}

#[derive(Clone, Debug)]
pub struct Human {
    pub id: String,
    pub name: String,
    pub friend_ids: Vec<String>,
    pub appears_in: Vec<Episode>,
    pub home_planet: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub starship_ids: Vec<String>,
}

#[Object]
impl Human {
    async fn id(&self) -> ID {
        ID::from(self.id.clone())
    }

    async fn name(&self) -> String {
        self.name.clone()
    }

    async fn home_planet(&self) -> Option<String> {
        self.home_planet.clone()
    }

    async fn height(
        &self,
        #[graphql(default_with = "LengthUnit::Meter")] unit: LengthUnit,
    ) -> Option<f64> {
        convert_length(self.height, unit)
    }

    async fn mass(&self) -> Option<f64> {
        self.mass
    }

    async fn friends(&self, ctx: &Context<'_>) -> Vec<Option<Character>> {
        let store = ctx.data_unchecked::<Store>();
        self.friend_ids.iter().map(|id| store.character(id)).collect()
    }

    async fn friends_connection(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<ID>,
    ) -> Result<FriendsConnection> {
        let store = ctx.data_unchecked::<Store>();
        let connection = paginate(
            &self.friend_ids,
            first,
            after.as_ref().map(|cursor| cursor.as_str()),
            |id| store.character(id),
        )?;
        Ok(connection)
    }

    async fn appears_in(&self) -> Vec<Episode> {
        self.appears_in.clone()
    }

    async fn starships(&self, ctx: &Context<'_>) -> Vec<Option<Starship>> {
        let store = ctx.data_unchecked::<Store>();
        self.starship_ids.iter().map(|id| store.starship(id)).collect()
    }
}

#[derive(Clone, Debug)]
pub struct Droid {
    pub id: String,
    pub name: String,
    pub friend_ids: Vec<String>,
    pub appears_in: Vec<Episode>,
    pub primary_function: Option<String>,
}

#[Object]
impl Droid {
    async fn id(&self) -> ID {
        ID::from(self.id.clone())
    }

    async fn name(&self) -> String {
        self.name.clone()
    }

    async fn friends(&self, ctx: &Context<'_>) -> Vec<Option<Character>> {
        let store = ctx.data_unchecked::<Store>();
        self.friend_ids.iter().map(|id| store.character(id)).collect()
    }

    async fn friends_connection(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<ID>,
    ) -> Result<FriendsConnection> {
        let store = ctx.data_unchecked::<Store>();
        let connection = paginate(
            &self.friend_ids,
            first,
            after.as_ref().map(|cursor| cursor.as_str()),
            |id| store.character(id),
        )?;
        Ok(connection)
    }

    async fn appears_in(&self) -> Vec<Episode> {
        self.appears_in.clone()
    }

    async fn primary_function(&self) -> Option<String> {
        self.primary_function.clone()
    }
}

#[derive(Clone, Debug)]
pub struct Starship {
    pub id: String,
    pub name: String,
    pub length: Option<f64>,
}

#[Object]
impl Starship {
    async fn id(&self) -> ID {
        ID::from(self.id.clone())
    }

    async fn name(&self) -> String {
        self.name.clone()
    }

    async fn length(
        &self,
        #[graphql(default_with = "LengthUnit::Meter")] unit: LengthUnit,
    ) -> Option<f64> {
        convert_length(self.length, unit)
    }

    async fn coordinates(&self) -> Vec<Vec<f64>> {
        // Demo data, as in the original fixtures.
        vec![vec![1.0, 2.0], vec![3.0, 4.0]]
    }
}

#[derive(Interface, Clone)]
#[graphql(
    field(name = "id", type = "ID"),
    field(name = "name", type = "String"),
    field(name = "friends", type = "Vec<Option<Character>>"),
    field(
        name = "friends_connection",
        type = "FriendsConnection",
        arg(name = "first", type = "Option<i32>"),
        arg(name = "after", type = "Option<ID>")
    ),
    field(name = "appears_in", type = "Vec<Episode>")
)]
pub enum Character {
    Human(Human),
    Droid(Droid),
}

#[derive(Union, Clone)]
pub enum SearchResult {
    Human(Human),
    Droid(Droid),
    Starship(Starship),
}

#[derive(Clone, Debug, PartialEq, SimpleObject)]
pub struct Review {
    pub episode: Option<Episode>,
    pub stars: i32,
    pub commentary: Option<String>,
}

#[derive(Clone, Debug, InputObject)]
pub struct ReviewInput {
    pub stars: i32,
    pub commentary: Option<String>,
    #[graphql(name = "favorite_color")]
    pub favorite_color: Option<ColorInput>,
}

#[derive(Clone, Debug, InputObject)]
pub struct ColorInput {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}
