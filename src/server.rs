//! MCP server exposing catalog search tools.

use crate::state::CatalogState;
use crate::tools::{
    GetExerciseRequest, SearchRequest, handle_catalog_stats, handle_get_exercise,
    handle_reload_catalog, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for workout catalog queries
#[derive(Clone)]
pub struct CatalogServer {
    /// Shared catalog state (config and current index)
    state: Arc<CatalogState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for CatalogServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl CatalogServer {
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search the workout catalog for exercises and equipment. Every query word must match a name, alternate name, muscle group or category; partial words match by prefix, case is ignored. An empty query lists the catalog."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(description = "Show the full details of a catalog exercise by id.")]
    async fn get_exercise(
        &self,
        Parameters(request): Parameters<GetExerciseRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_exercise(&self.state, request).await
    }

    #[tool(
        description = "Rebuild the search index from the catalog file on disk. Use after the catalog file has been edited."
    )]
    async fn reload_catalog(&self) -> std::result::Result<String, String> {
        handle_reload_catalog(&self.state).await
    }

    #[tool(description = "Show catalog item counts and index vocabulary sizes.")]
    async fn catalog_stats(&self) -> std::result::Result<String, String> {
        Ok(handle_catalog_stats(&self.state).await)
    }
}

#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(
            "workout-catalog-search: multi-word, prefix-tolerant search over a workout \
             exercise and equipment catalog. Use search to find items, get_exercise for \
             details, and reload_catalog after editing the catalog file."
                .to_string(),
        );
        info
    }
}
