use portaria_core::{CommunicationEdit, CommunicationRepository, MemoryStore, Priority};

const PUBLISHED: &str = "2024-01-25T10:00:00.000Z";

fn edit(title: &str, priority: Priority) -> CommunicationEdit {
    CommunicationEdit {
        title: title.to_string(),
        content: "conteúdo".to_string(),
        author: "Administração".to_string(),
        priority,
    }
}

#[test]
fn publish_prepends_newest_first() {
    let store = MemoryStore::new();
    let repo = CommunicationRepository::new(&store);

    let older = repo
        .publish("Primeiro aviso", "a", Priority::Low, "Administração", PUBLISHED)
        .unwrap();
    let newer = repo
        .publish("Segundo aviso", "b", Priority::High, "Síndico", PUBLISHED)
        .unwrap();

    let stored = repo.get_all().unwrap();
    assert_eq!(stored[0].id, newer.id);
    assert_eq!(stored[1].id, older.id);
}

#[test]
fn edit_replaces_mutable_fields_preserving_id_and_date() {
    let store = MemoryStore::new();
    let repo = CommunicationRepository::new(&store);
    let comm = repo
        .publish("Aviso", "original", Priority::Low, "Administração", PUBLISHED)
        .unwrap();

    repo.edit(&comm.id, &edit("Aviso urgente", Priority::High)).unwrap();

    let stored = repo.get_all().unwrap();
    assert_eq!(stored[0].id, comm.id);
    assert_eq!(stored[0].date, PUBLISHED);
    assert_eq!(stored[0].title, "Aviso urgente");
    assert_eq!(stored[0].priority, Priority::High);
}

#[test]
fn edit_and_delete_of_unknown_ids_are_noops() {
    let store = MemoryStore::new();
    let repo = CommunicationRepository::new(&store);
    let comm = repo
        .publish("Aviso", "texto", Priority::Medium, "Síndico", PUBLISHED)
        .unwrap();

    repo.edit("communication-missing", &edit("x", Priority::Low)).unwrap();
    repo.delete("communication-missing").unwrap();

    let stored = repo.get_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Aviso");
    assert_eq!(stored[0].id, comm.id);
}

#[test]
fn delete_removes_exactly_one_record() {
    let store = MemoryStore::new();
    let repo = CommunicationRepository::new(&store);
    let first = repo
        .publish("Um", "a", Priority::Low, "Administração", PUBLISHED)
        .unwrap();
    let second = repo
        .publish("Dois", "b", Priority::Low, "Administração", PUBLISHED)
        .unwrap();

    repo.delete(&first.id).unwrap();

    let stored = repo.get_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, second.id);
}
