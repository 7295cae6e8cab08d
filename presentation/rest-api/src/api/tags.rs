use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Auth,
    Chat,
    Health,
    Menu,
    Orders,
}
