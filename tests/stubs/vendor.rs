pub const DEVICE_LIST: &str = r#"
[
    {
        "idPdc": 100,
        "nom": "Elm St",
        "lat": 30.2672,
        "lon": -97.7431,
        "pratique": [{"id": 101}, {"id": 102}]
    },
    {
        "idPdc": 200,
        "nom": "Lakeshore Trail",
        "lat": 30.25,
        "lon": -97.74,
        "pratique": []
    }
]
"#;

pub const EMPTY_DEVICE_LIST: &str = "[]";

pub const COUNTS_100: &str = r#"
[
    ["01/06/2022", 5],
    ["01/06/2022", 0],
    ["02/06/2022", 3]
]
"#;

pub const COUNTS_200: &str = "[]";
