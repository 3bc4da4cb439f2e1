use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, Order, QueryOrder,
    sea_query::NullOrdering,
};

use crate::{entities::movie, error::AppResult};

/// Whether an insert landed or hit an existing id/title.
#[derive(Debug, Eq, PartialEq)]
pub enum InsertOutcome {
    Inserted,
    DuplicateIgnored,
}

/// Listing result; `Unavailable` covers a database without the movie table.
#[derive(Debug)]
pub enum ListOutcome {
    Records(Vec<movie::Model>),
    Unavailable,
}

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, movie: movie::Model) -> AppResult<InsertOutcome> {
        let record = movie::ActiveModel {
            id: Set(movie.id),
            title: Set(movie.title),
            year: Set(movie.year),
            description: Set(movie.description),
            rating: Set(movie.rating),
            ranking: Set(movie.ranking),
            review: Set(movie.review),
            img_url: Set(movie.img_url),
        };

        match movie::Entity::insert(record).exec(&self.db).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                Ok(InsertOutcome::DuplicateIgnored)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Rating descending with unrated movies last; ties order by id ascending.
    pub async fn list_by_rating(&self) -> AppResult<ListOutcome> {
        let result = movie::Entity::find()
            .order_by_with_nulls(movie::Column::Rating, Order::Desc, NullOrdering::Last)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await;

        match result {
            Ok(records) => Ok(ListOutcome::Records(records)),
            Err(e) if e.to_string().contains("no such table") => Ok(ListOutcome::Unavailable),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn set_rating(
        &self,
        movie: movie::Model,
        rating: f64,
        review: String,
    ) -> AppResult<movie::Model> {
        let mut record: movie::ActiveModel = movie.into();
        record.rating = Set(Some(rating));
        record.review = Set(Some(review));
        Ok(record.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Assigns 1-based ranks to an already sorted listing and persists any
    /// row whose stored rank is stale.
    pub async fn assign_ranks(&self, movies: Vec<movie::Model>) -> AppResult<Vec<movie::Model>> {
        let mut ranked = Vec::with_capacity(movies.len());
        for (position, movie) in movies.into_iter().enumerate() {
            let rank = position as i32 + 1;
            if movie.ranking == Some(rank) {
                ranked.push(movie);
                continue;
            }
            let mut record: movie::ActiveModel = movie.into();
            record.ranking = Set(Some(rank));
            ranked.push(record.update(&self.db).await?);
        }
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;

    use super::*;
    use crate::db;

    fn sample(id: i32, title: &str, rating: Option<f64>) -> movie::Model {
        movie::Model {
            id,
            title: title.to_string(),
            year: 1999,
            description: "A movie.".to_string(),
            rating,
            ranking: None,
            review: None,
            img_url: String::new(),
        }
    }

    async fn memory_store() -> MovieStore {
        MovieStore::new(db::connect("sqlite::memory:").await.unwrap())
    }

    async fn count(store: &MovieStore) -> usize {
        match store.list_by_rating().await.unwrap() {
            ListOutcome::Records(records) => records.len(),
            ListOutcome::Unavailable => panic!("schema missing"),
        }
    }

    #[tokio::test]
    async fn duplicate_id_leaves_store_unchanged() {
        let store = memory_store().await;
        assert_eq!(store.insert(sample(550, "Fight Club", None)).await.unwrap(), InsertOutcome::Inserted);
        assert_eq!(
            store.insert(sample(550, "Se7en", None)).await.unwrap(),
            InsertOutcome::DuplicateIgnored
        );
        assert_eq!(count(&store).await, 1);
        assert_eq!(store.get(550).await.unwrap().unwrap().title, "Fight Club");
    }

    #[tokio::test]
    async fn duplicate_title_leaves_store_unchanged() {
        let store = memory_store().await;
        store.insert(sample(550, "Fight Club", None)).await.unwrap();
        assert_eq!(
            store.insert(sample(551, "Fight Club", None)).await.unwrap(),
            InsertOutcome::DuplicateIgnored
        );
        assert_eq!(count(&store).await, 1);
    }

    #[tokio::test]
    async fn ranks_are_contiguous_and_follow_rating_descending() {
        let store = memory_store().await;
        store.insert(sample(1, "Mid", Some(5.0))).await.unwrap();
        store.insert(sample(2, "Top", Some(9.0))).await.unwrap();
        store.insert(sample(3, "Unrated", None)).await.unwrap();

        let ListOutcome::Records(listed) = store.list_by_rating().await.unwrap() else {
            panic!("schema missing");
        };
        let ranked = store.assign_ranks(listed).await.unwrap();

        let order: Vec<(i32, Option<i32>)> = ranked.iter().map(|m| (m.id, m.ranking)).collect();
        assert_eq!(order, vec![(2, Some(1)), (1, Some(2)), (3, Some(3))]);

        // Ranks were written back, not only returned
        assert_eq!(store.get(2).await.unwrap().unwrap().ranking, Some(1));
        assert_eq!(store.get(3).await.unwrap().unwrap().ranking, Some(3));
    }

    #[tokio::test]
    async fn equal_ratings_break_ties_by_id() {
        let store = memory_store().await;
        store.insert(sample(7, "Second", Some(8.0))).await.unwrap();
        store.insert(sample(3, "First", Some(8.0))).await.unwrap();

        let ListOutcome::Records(listed) = store.list_by_rating().await.unwrap() else {
            panic!("schema missing");
        };
        let ranked = store.assign_ranks(listed).await.unwrap();
        let ids: Vec<i32> = ranked.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[tokio::test]
    async fn set_rating_persists_exact_values_and_reranks() {
        let store = memory_store().await;
        store.insert(sample(550, "Fight Club", None)).await.unwrap();
        store.insert(sample(603, "The Matrix", Some(9.0))).await.unwrap();

        let movie = store.get(550).await.unwrap().unwrap();
        let updated = store.set_rating(movie, 7.5, "Great film".to_string()).await.unwrap();
        assert_eq!(updated.rating, Some(7.5));
        assert_eq!(updated.review.as_deref(), Some("Great film"));

        let stored = store.get(550).await.unwrap().unwrap();
        assert_eq!(stored.rating, Some(7.5));
        assert_eq!(stored.review.as_deref(), Some("Great film"));

        let ListOutcome::Records(listed) = store.list_by_rating().await.unwrap() else {
            panic!("schema missing");
        };
        let ranked = store.assign_ranks(listed).await.unwrap();
        let order: Vec<i32> = ranked.iter().map(|m| m.id).collect();
        assert_eq!(order, vec![603, 550]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = memory_store().await;
        store.insert(sample(41, "Kept", Some(6.0))).await.unwrap();
        store.insert(sample(42, "Gone", Some(7.0))).await.unwrap();

        assert!(store.delete(42).await.unwrap());
        assert!(store.get(42).await.unwrap().is_none());
        assert_eq!(store.get(41).await.unwrap().unwrap().id, 41);

        // Second delete of the same id reports not found
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn listing_without_schema_reports_unavailable() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let store = MovieStore::new(db);
        assert!(matches!(store.list_by_rating().await.unwrap(), ListOutcome::Unavailable));
    }
}
