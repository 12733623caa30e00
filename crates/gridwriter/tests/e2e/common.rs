//! Shared fixtures

use gridwriter::{record, FieldDisplay, SheetWriter, Worksheet};

pub struct Person {
    pub name: String,
    pub age: u32,
}

record!(Person {
    name => FieldDisplay::titled("Name"),
    age => FieldDisplay::titled("Age"),
});

pub struct Account {
    pub login: String,
    pub password: String,
    pub balance: f64,
}

record!(Account {
    login,
    password => FieldDisplay::titled("Password").with_included(false),
    balance => FieldDisplay::titled("Balance").with_format("0.00"),
});

pub fn people() -> Vec<Person> {
    vec![
        Person { name: "A".into(), age: 30 },
        Person { name: "B".into(), age: 25 },
        Person { name: "C".into(), age: 40 },
    ]
}

pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            login: "root".into(),
            password: "hunter2".into(),
            balance: 10.5,
        },
        Account {
            login: "guest".into(),
            password: "guest".into(),
            balance: 0.0,
        },
    ]
}

/// Text of a cell of the active sheet, "" when empty
pub fn text(writer: &SheetWriter, address: &str) -> String {
    sheet(writer).get_value(address).unwrap().to_string()
}

pub fn sheet(writer: &SheetWriter) -> &Worksheet {
    writer.current_sheet().unwrap()
}
