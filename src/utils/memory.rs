use std::cmp;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::date::DATE_FMT;

pub(crate) type Item = Map<String, Value>;

const MAX_PAGE_SIZE: usize = 500;

#[derive(Debug)]
struct Table {
    pk: String,
    // insertion order is the scan order
    items: Vec<Item>,
}

impl Table {
    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| parse_string_attribute(self.pk.as_str(), item).as_deref() == Some(key))
    }
}

// MemoryClient is the in-process table store that every repository shares. Writes are
// conditional so that concurrent writers cannot silently overwrite each other.
#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> LibraryResult<RwLockReadGuard<'_, HashMap<String, Table>>> {
        self.tables.read().map_err(|err| LibraryError::runtime(
            format!("memory store lock poisoned {}", err).as_str(), None))
    }

    fn write(&self) -> LibraryResult<RwLockWriteGuard<'_, HashMap<String, Table>>> {
        self.tables.write().map_err(|err| LibraryError::runtime(
            format!("memory store lock poisoned {}", err).as_str(), None))
    }

    pub(crate) fn put_item(&self, table_name: &str, item: Item) -> LibraryResult<usize> {
        let mut tables = self.write()?;
        let table = table_mut(&mut tables, table_name)?;
        let key = parse_string_attribute(table.pk.as_str(), &item).ok_or_else(|| LibraryError::validation(
            format!("item for {} has no {} key", table_name, table.pk).as_str(), Some("400".to_string())))?;
        // attribute_not_exists(pk)
        if table.position(key.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(format!("{} already exists in {}", key, table_name).as_str()));
        }
        table.items.push(item);
        Ok(1)
    }

    pub(crate) fn update_item(&self, table_name: &str, mut item: Item) -> LibraryResult<usize> {
        let mut tables = self.write()?;
        let table = table_mut(&mut tables, table_name)?;
        let key = parse_string_attribute(table.pk.as_str(), &item).ok_or_else(|| LibraryError::validation(
            format!("item for {} has no {} key", table_name, table.pk).as_str(), Some("400".to_string())))?;
        let ndx = table.position(key.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("{} not found in {}", key, table_name).as_str()))?;
        let old_version = parse_number_attribute("version", &item);
        let stored = table.items.get_mut(ndx).ok_or_else(|| LibraryError::not_found(
            format!("{} not found in {}", key, table_name).as_str()))?;
        // attribute_exists(version) AND version = :old_version
        if parse_number_attribute("version", stored) != old_version {
            return Err(LibraryError::unavailable(
                format!("{} in {} was modified after version {}", key, table_name, old_version).as_str(),
                Some("409".to_string()), true));
        }
        item.insert("version".to_string(), Value::from(old_version + 1));
        *stored = item;
        Ok(1)
    }

    pub(crate) fn get_item(&self, table_name: &str, key: &str) -> LibraryResult<Item> {
        let tables = self.read()?;
        let table = tables.get(table_name).ok_or_else(|| LibraryError::not_found(
            format!("table {} not found", table_name).as_str()))?;
        table.position(key).and_then(|ndx| table.items.get(ndx)).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("{} item not found for {}", table_name, key).as_str()))
    }

    pub(crate) fn delete_item(&self, table_name: &str, key: &str) -> LibraryResult<usize> {
        let mut tables = self.write()?;
        let table = table_mut(&mut tables, table_name)?;
        if let Some(ndx) = table.position(key) {
            table.items.remove(ndx);
            return Ok(1);
        }
        Ok(0)
    }

    // query scans the table in insertion order and keeps items whose attributes equal every
    // predicate value; the page token is the offset into the matching items.
    pub(crate) fn query(&self, table_name: &str, predicate: &HashMap<String, String>,
                        page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Item>> {
        let offset = parse_page(page)?;
        let page_size = cmp::min(page_size, MAX_PAGE_SIZE);
        let tables = self.read()?;
        let table = tables.get(table_name).ok_or_else(|| LibraryError::not_found(
            format!("table {} not found", table_name).as_str()))?;
        let matched: Vec<&Item> = table.items.iter()
            .filter(|item| predicate.iter().all(|(k, v)| attribute_matches(item.get(k), v)))
            .collect();
        let records: Vec<Item> = matched.iter().skip(offset).take(page_size).map(|item| (*item).clone()).collect();
        let next = offset + records.len();
        let next_page = if next < matched.len() { Some(next.to_string()) } else { None };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

fn table_mut<'a>(tables: &'a mut HashMap<String, Table>, table_name: &str) -> LibraryResult<&'a mut Table> {
    tables.get_mut(table_name).ok_or_else(|| LibraryError::not_found(
        format!("table {} not found", table_name).as_str()))
}

pub(crate) fn create_table(client: &MemoryClient, table_name: &str, pk: &str) -> LibraryResult<()> {
    let mut tables = client.write()?;
    if tables.contains_key(table_name) {
        return Err(LibraryError::duplicate_key(format!("table {} already exists", table_name).as_str()));
    }
    tables.insert(table_name.to_string(), Table { pk: pk.to_string(), items: vec![] });
    Ok(())
}

// like create_table, but a table that already exists is fine
pub(crate) fn ensure_table(client: &MemoryClient, table_name: &str, pk: &str) -> LibraryResult<()> {
    match create_table(client, table_name, pk) {
        Err(LibraryError::DuplicateKey { .. }) => Ok(()),
        other => other,
    }
}

pub(crate) fn parse_item(value: Value) -> Result<Item, String> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("failed to parse {:?}", other)),
    }
}

pub(crate) fn parse_string_attribute(name: &str, map: &Item) -> Option<String> {
    if let Some(Value::String(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

pub(crate) fn parse_number_attribute(name: &str, map: &Item) -> i64 {
    if let Some(Value::Number(n)) = map.get(name) {
        if let Some(n) = n.as_i64() {
            return n;
        }
    }
    0
}

pub(crate) fn string_date(date: NaiveDateTime) -> Value {
    Value::String(format!("{}", date.format(DATE_FMT)))
}

fn attribute_matches(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        _ => false,
    }
}

fn parse_page(page: Option<&str>) -> LibraryResult<usize> {
    match page {
        Some(page) => page.parse::<usize>().map_err(|err| LibraryError::validation(
            format!("invalid page token {} {}", page, err).as_str(), Some("400".to_string()))),
        None => Ok(0),
    }
}

// MemoryRepository stores any serializable entity as a JSON item in one table of the shared client.
#[derive(Debug)]
pub(crate) struct MemoryRepository<Entity> {
    client: MemoryClient,
    table_name: String,
    _entity: PhantomData<fn() -> Entity>,
}

impl<Entity> MemoryRepository<Entity> {
    pub(crate) fn new(client: MemoryClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            _entity: PhantomData,
        }
    }
}

fn map_to_entity<Entity: DeserializeOwned>(item: Item) -> LibraryResult<Entity> {
    Ok(serde_json::from_value(Value::Object(item))?)
}

#[async_trait]
impl<Entity> Repository<Entity> for MemoryRepository<Entity>
    where Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    async fn create(&self, entity: &Entity) -> LibraryResult<usize> {
        let val = serde_json::to_value(entity)?;
        self.client.put_item(self.table_name.as_str(), parse_item(val)?)
    }

    async fn update(&self, entity: &Entity) -> LibraryResult<usize> {
        let mut item = parse_item(serde_json::to_value(entity)?)?;
        item.insert("updated_at".to_string(), string_date(Utc::now().naive_utc()));
        self.client.update_item(self.table_name.as_str(), item)
    }

    async fn get(&self, id: &str) -> LibraryResult<Entity> {
        map_to_entity(self.client.get_item(self.table_name.as_str(), id)?)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.client.delete_item(self.table_name.as_str(), id)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>> {
        let res = self.client.query(self.table_name.as_str(), predicate, page, page_size)?;
        let records = res.records.into_iter().map(map_to_entity).collect::<LibraryResult<Vec<Entity>>>()?;
        Ok(PaginatedResult::new(page, res.page_size, res.next_page, records))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde_json::json;
    use crate::core::library::LibraryError;
    use crate::utils::memory::{create_table, ensure_table, parse_item, parse_number_attribute, MemoryClient};

    fn client_with_table() -> MemoryClient {
        let client = MemoryClient::new();
        create_table(&client, "books", "book_id").expect("should create table");
        client
    }

    #[tokio::test]
    async fn test_should_put_and_get_item() {
        let client = client_with_table();
        let item = parse_item(json!({"book_id": "b1", "version": 0, "title": "1984"})).expect("should parse");
        assert_eq!(1, client.put_item("books", item).expect("should put"));
        let loaded = client.get_item("books", "b1").expect("should get");
        assert_eq!(Some(&json!("1984")), loaded.get("title"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_key() {
        let client = client_with_table();
        let item = parse_item(json!({"book_id": "b1", "version": 0})).expect("should parse");
        client.put_item("books", item.clone()).expect("should put");
        assert!(matches!(client.put_item("books", item), Err(LibraryError::DuplicateKey { .. })));
        assert!(matches!(create_table(&client, "books", "book_id"), Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_update_with_matching_version_only() {
        let client = client_with_table();
        let item = parse_item(json!({"book_id": "b1", "version": 0, "book_status": "Available"})).expect("should parse");
        client.put_item("books", item).expect("should put");

        let update = parse_item(json!({"book_id": "b1", "version": 0, "book_status": "Borrowed"})).expect("should parse");
        client.update_item("books", update.clone()).expect("should update");
        let loaded = client.get_item("books", "b1").expect("should get");
        assert_eq!(1, parse_number_attribute("version", &loaded));
        assert_eq!(Some(&json!("Borrowed")), loaded.get("book_status"));

        // same stale version again loses
        let res = client.update_item("books", update);
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { retryable: true, .. })));
    }

    #[tokio::test]
    async fn test_should_query_in_insertion_order_with_pages() {
        let client = client_with_table();
        for (id, status) in [("b1", "Available"), ("b2", "Borrowed"), ("b3", "Available"), ("b4", "Available")] {
            let item = parse_item(json!({"book_id": id, "version": 0, "book_status": status})).expect("should parse");
            client.put_item("books", item).expect("should put");
        }
        let predicate = HashMap::from([("book_status".to_string(), "Available".to_string())]);
        let first = client.query("books", &predicate, None, 2).expect("should query");
        let ids: Vec<_> = first.records.iter().map(|i| i.get("book_id").cloned()).collect();
        assert_eq!(vec![Some(json!("b1")), Some(json!("b3"))], ids);
        assert_eq!(Some("2".to_string()), first.next_page);

        let second = client.query("books", &predicate, first.next_page.as_deref(), 2).expect("should query");
        assert_eq!(1, second.records.len());
        assert_eq!(None, second.next_page);

        assert!(client.query("books", &predicate, Some("abc"), 2).is_err());
    }

    #[tokio::test]
    async fn test_should_delete_item() {
        let client = client_with_table();
        let item = parse_item(json!({"book_id": "b1", "version": 0})).expect("should parse");
        client.put_item("books", item).expect("should put");
        assert_eq!(1, client.delete_item("books", "b1").expect("should delete"));
        assert_eq!(0, client.delete_item("books", "b1").expect("should delete"));
        assert!(matches!(client.get_item("books", "b1"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(client.get_item("missing", "b1"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_share_tables_between_clones() {
        let client = client_with_table();
        let other = client.clone();
        let item = parse_item(json!({"book_id": "b1", "version": 0})).expect("should parse");
        client.put_item("books", item).expect("should put");
        assert!(other.get_item("books", "b1").is_ok());
    }

    #[tokio::test]
    async fn test_should_ensure_existing_table() {
        let client = client_with_table();
        let item = parse_item(json!({"book_id": "b1", "version": 0})).expect("should parse");
        client.put_item("books", item).expect("should put");
        ensure_table(&client, "books", "book_id").expect("should keep table");
        assert!(client.get_item("books", "b1").is_ok());
        ensure_table(&client, "patrons", "patron_id").expect("should create table");
    }

    #[tokio::test]
    async fn test_should_report_poisoned_store() {
        let client = MemoryClient::new();
        let poisoner = client.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.tables.write();
            panic!("writer died holding the lock");
        }).join();
        let res = ensure_table(&client, "books", "book_id");
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
    }
}
