//! Query, mutation and subscription roots, and the built schema type.

use crate::models::{
    Character, Droid, Episode, Human, Review, ReviewInput, SearchResult, Starship,
};
use crate::pubsub::ReviewPublisher;
use crate::store::Store;
use crate::GraphqlError;
use async_graphql::{Context, Object, Result, Schema, Subscription, ID};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

pub type StarWarsSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(store: Store, publisher: ReviewPublisher) -> StarWarsSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(store)
        .data(publisher)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hero(&self, ctx: &Context<'_>, episode: Option<Episode>) -> Option<Character> {
        ctx.data_unchecked::<Store>().hero(episode)
    }

    async fn reviews(&self, ctx: &Context<'_>, episode: Episode) -> Vec<Review> {
        ctx.data_unchecked::<Store>().reviews(episode).await
    }

    async fn search(&self, ctx: &Context<'_>, text: Option<String>) -> Vec<SearchResult> {
        ctx.data_unchecked::<Store>().search(text.as_deref())
    }

    async fn character(&self, ctx: &Context<'_>, id: ID) -> Option<Character> {
        ctx.data_unchecked::<Store>().character(id.as_str())
    }

    async fn droid(&self, ctx: &Context<'_>, id: ID) -> Option<Droid> {
        ctx.data_unchecked::<Store>().droid(id.as_str())
    }

    async fn human(&self, ctx: &Context<'_>, id: ID) -> Option<Human> {
        ctx.data_unchecked::<Store>().human(id.as_str())
    }

    async fn starship(&self, ctx: &Context<'_>, id: ID) -> Option<Starship> {
        ctx.data_unchecked::<Store>().starship(id.as_str())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_review(
        &self,
        ctx: &Context<'_>,
        episode: Option<Episode>,
        review: ReviewInput,
    ) -> Result<Review> {
        let episode = episode.ok_or(GraphqlError::ReviewWithoutEpisode)?;

        let review = ctx
            .data_unchecked::<Store>()
            .add_review(episode, review)
            .await;
        ctx.data_unchecked::<ReviewPublisher>()
            .publish(review.clone());

        Ok(review)
    }
}

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Reviews as they are created, optionally restricted to one episode.
    async fn review_added(
        &self,
        ctx: &Context<'_>,
        episode: Option<Episode>,
    ) -> impl Stream<Item = Review> {
        let rx = ctx.data_unchecked::<ReviewPublisher>().subscribe();
        BroadcastStream::new(rx).filter_map(move |event| {
            let review = event
                .ok()
                .filter(|review| episode.is_none() || review.episode == episode);
            async move { review }
        })
    }
}
