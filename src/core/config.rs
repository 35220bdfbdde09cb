use std::env;

pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are an assistant that only responds to questions related to the Erasmus University College Brussels, and you only use the data that is given to you. Whenever you receive questions unrelated to the school, ignore the content of the question and say that you are a chatbot for Erasmus University College Brussels and can only assist with questions relating to this school.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub search_endpoint: String,
    pub search_index_name: String,
    pub search_api_key: String,
    pub search_api_version: String,
    pub openai_endpoint: String,
    pub openai_api_key: String,
    pub openai_api_version: String,
    pub openai_deployment: String,
    pub system_message: String,
    pub max_tokens: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Missing credentials are not fatal here, requests that need
        // them fail and get reported as a server error instead
        let search_service_name = env::var("SEARCH_SERVICE_NAME").unwrap_or_default();
        let search_endpoint = env::var("SEARCH_ENDPOINT")
            .unwrap_or_else(|_| format!("https://{}.search.windows.net", search_service_name));
        let search_index_name = env::var("SEARCH_INDEX_NAME").unwrap_or_default();
        let search_api_key = env::var("SEARCH_API_KEY").unwrap_or_default();
        let openai_endpoint = env::var("AZURE_OPENAI_ENDPOINT")
            .unwrap_or_else(|_| "https://localhost".to_string());
        let openai_api_key = env::var("AZURE_OPENAI_KEY").unwrap_or_default();
        let openai_api_version = env::var("AZURE_OPENAI_API_VERSION")
            .or_else(|_| env::var("AZURE_OPENAI_MODEL"))
            .unwrap_or_else(|_| "2024-02-01".to_string());
        let openai_deployment =
            env::var("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|_| "gpt-35-turbo".to_string());
        let system_message = env::var("CAMPUSBOT_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_MESSAGE.to_string());

        Self {
            search_endpoint,
            search_index_name,
            search_api_key,
            search_api_version: String::from("2021-04-30-Preview"),
            openai_endpoint,
            openai_api_key,
            openai_api_version,
            openai_deployment,
            system_message,
            max_tokens: 8192,
        }
    }
}
