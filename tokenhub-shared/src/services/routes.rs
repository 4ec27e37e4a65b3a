use crate::models::tokens::{Operation, TokenStandard};

/// Paths for one operation across the three standards.
#[derive(Debug, Clone, Copy)]
pub struct StandardRoutes {
    pub erc20: &'static str,
    pub erc721: &'static str,
    pub erc1155: &'static str,
}

impl StandardRoutes {
    pub fn get(&self, standard: TokenStandard) -> &'static str {
        match standard {
            TokenStandard::Erc20 => self.erc20,
            TokenStandard::Erc721 => self.erc721,
            TokenStandard::Erc1155 => self.erc1155,
        }
    }
}

/// Mirrors the backend router.
#[derive(Debug, Clone, Copy)]
pub struct ApiRoutes {
    pub balance: StandardRoutes,
    pub deploy: StandardRoutes,
    pub mint: StandardRoutes,
    pub burn: StandardRoutes,
}

pub const API_ROUTES: ApiRoutes = ApiRoutes {
    balance: StandardRoutes {
        erc20: "/api/balance/erc20",
        erc721: "/api/balance/erc721",
        erc1155: "/api/balance/erc1155",
    },
    deploy: StandardRoutes {
        erc20: "/api/deploy/erc20",
        erc721: "/api/deploy/erc721",
        erc1155: "/api/deploy/erc1155",
    },
    mint: StandardRoutes {
        erc20: "/api/mint/erc20",
        erc721: "/api/mint/erc721",
        erc1155: "/api/mint/erc1155",
    },
    burn: StandardRoutes {
        erc20: "/api/burn/erc20",
        erc721: "/api/burn/erc721",
        erc1155: "/api/burn/erc1155",
    },
};

pub fn route(operation: Operation, standard: TokenStandard) -> &'static str {
    let routes = match operation {
        Operation::Balance => &API_ROUTES.balance,
        Operation::Deploy => &API_ROUTES.deploy,
        Operation::Mint => &API_ROUTES.mint,
        Operation::Burn => &API_ROUTES.burn,
    };
    routes.get(standard)
}
