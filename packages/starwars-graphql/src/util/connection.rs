//! Relay-style connections for paginated friend lists.
//! See: https://graphql.org/learn/pagination/#end-of-list-counts-and-connections
//! See: https://relay.dev/graphql/connections.htm#sec-Connection-Types

use super::paging::{encode_cursor, PageWindow, PagingResult};
use crate::models::Character;
use async_graphql::{SimpleObject, ID};

/// See: https://relay.dev/graphql/connections.htm#sec-PageInfo
#[derive(Clone, Debug, SimpleObject)]
pub struct PageInfo {
    pub start_cursor: Option<ID>,
    pub end_cursor: Option<ID>,
    pub has_next_page: bool,
}

/// See: https://relay.dev/graphql/connections.htm#sec-Edge-Types
#[derive(Clone, SimpleObject)]
pub struct FriendsEdge {
    pub cursor: ID,
    pub node: Option<Character>,
}

#[derive(Clone, SimpleObject)]
pub struct FriendsConnection {
    pub total_count: i32,
    pub edges: Vec<FriendsEdge>,
    pub friends: Vec<Option<Character>>,
    pub page_info: PageInfo,
}

/// Window an ordered friend reference list into a connection.
///
/// Cursors are issued per edge position, so a cursor handed back as `after`
/// resumes on the edge that follows it. Identifiers that `resolve` does not
/// know are preserved as absent nodes rather than filtered, keeping the edge
/// list aligned with the underlying reference list.
pub fn paginate<F>(
    ids: &[String],
    first: Option<i32>,
    after: Option<&str>,
    resolve: F,
) -> PagingResult<FriendsConnection>
where
    F: Fn(&str) -> Option<Character>,
{
    let window = PageWindow::new(ids.len(), first, after)?;

    let edges: Vec<FriendsEdge> = ids[window.offset..window.end]
        .iter()
        .enumerate()
        .map(|(i, id)| FriendsEdge {
            cursor: ID::from(encode_cursor(window.offset + i)),
            node: resolve(id),
        })
        .collect();

    let friends = edges.iter().map(|edge| edge.node.clone()).collect();
    let page_info = PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_next_page: window.has_next_page,
    };

    Ok(FriendsConnection {
        total_count: ids.len() as i32,
        edges,
        friends,
        page_info,
    })
}
