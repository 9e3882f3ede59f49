use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};

use super::{DocumentStore, UpdateOutcome};
use crate::models::{APPLICATIONS_COLLECTION, REVIEWS_COLLECTION, USERS_COLLECTION};
use crate::utils::StoreError;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Stable API v1, igual ao cluster Atlas
        let server_api = ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build();
        client_options.server_api = Some(server_api);

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        let mongodb = Self { client, db };

        mongodb.ping().await?;
        log::info!("🏓 Pinged your deployment. Successfully connected to MongoDB!");

        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Índices de consulta (nenhum é unique: unicidade de email é só na aplicação)
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let indexes: [(&str, Document); 5] = [
            (USERS_COLLECTION, doc! { "email": 1 }),
            (USERS_COLLECTION, doc! { "moderatorRequest": 1 }),
            (APPLICATIONS_COLLECTION, doc! { "user_email": 1 }),
            (REVIEWS_COLLECTION, doc! { "user_email": 1 }),
            (REVIEWS_COLLECTION, doc! { "scholarship_id": 1 }),
        ];

        for (collection, keys) in indexes {
            let label = format!("{}({})", collection, keys.keys().cloned().collect::<Vec<_>>().join(", "));
            let model = IndexModel::builder().keys(keys).build();

            match self.collection(collection).create_index(model).await {
                Ok(_) => log::info!("   ✅ Index created: {}", label),
                Err(e) => log::warn!("   ⚠️  Could not create index {}: {}", label, e),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let coll = self.collection(collection);
        let mut action = coll.find(filter);
        if let Some(limit) = limit {
            action = action.limit(limit);
        }

        let cursor = action.await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        changes: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": changes })
            .await?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("MongoDB database {}", self.db.name())
    }
}
