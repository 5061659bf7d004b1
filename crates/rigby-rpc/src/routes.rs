//! The declarative route table.
//!
//! Every API method is one `(namespace, method) -> path` entry. The
//! `routes!` invocation at the bottom of this file is the single source for
//! the static [`ROUTES`] table, the per-namespace route-group types and the
//! [`RouteGroups`] accessors, so the three can never drift apart.
//!
//! ```no_run
//! use rigby_rpc::{RigbyClient, RouteGroups};
//! use serde_json::json;
//!
//! # async fn example() -> rigby_core::Result<()> {
//! let client = RigbyClient::new("my-token")?;
//! client.players().ban(json!({ "serverId": "abc", "accountId": 71 })).await?;
//! client.servers().invites_create(json!({ "serverId": "abc" })).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use rigby_core::{Caller, Result};

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    /// Namespace the method belongs to, e.g. `levels`.
    pub namespace: &'static str,
    /// Method name within the namespace, e.g. `get` or `session.login`.
    pub method: &'static str,
    /// Fixed path segments the method posts to.
    pub path: &'static [&'static str],
}

impl Route {
    /// Find a route by namespace and method name.
    pub fn find(namespace: &str, method: &str) -> Option<&'static Route> {
        ROUTES
            .iter()
            .find(|r| r.namespace == namespace && r.method == method)
    }

    /// Dotted name, e.g. `levels.get`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.namespace, self.method)
    }

    /// Slash-joined path, e.g. `rpc/gdps/levels/get`.
    pub fn url_path(&self) -> String {
        self.path.join("/")
    }

    /// Invoke this route through `caller`, forwarding `payload` unchanged.
    pub async fn invoke<C: Caller + ?Sized>(&self, caller: &C, payload: Value) -> Result<Value> {
        caller.call(self.path, payload).await
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.method)
    }
}

/// Resolve a dotted route name such as `levels.get` or
/// `player.session.login`.
pub fn lookup(name: &str) -> Option<&'static Route> {
    let (namespace, method) = name.split_once('.')?;
    Route::find(namespace, method)
}

/// Namespaces in table order.
pub fn namespaces() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for route in ROUTES {
        if !seen.contains(&route.namespace) {
            seen.push(route.namespace);
        }
    }
    seen
}

/// Routes belonging to one namespace, in table order.
pub fn in_namespace(namespace: &str) -> impl Iterator<Item = &'static Route> + '_ {
    ROUTES.iter().filter(move |r| r.namespace == namespace)
}

macro_rules! routes {
    (
        $(
            $(#[$group_meta:meta])*
            $group:ident => $accessor:ident($namespace:literal) {
                $( $method:ident($name:literal) => [$($segment:literal),+ $(,)?] ),* $(,)?
            }
        )*
    ) => {
        /// Every route of the API, grouped by namespace.
        pub const ROUTES: &[Route] = &[
            $( $(
                Route {
                    namespace: $namespace,
                    method: $name,
                    path: &[$($segment),+],
                },
            )* )*
        ];

        $(
            $(#[$group_meta])*
            pub struct $group<'a, C: ?Sized> {
                caller: &'a C,
            }

            impl<'a, C: ?Sized> $group<'a, C> {
                /// Namespace of this route group.
                pub const NAMESPACE: &'static str = $namespace;

                /// Bind the route group to a caller.
                pub fn new(caller: &'a C) -> Self {
                    Self { caller }
                }
            }

            impl<C: ?Sized> Clone for $group<'_, C> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<C: ?Sized> Copy for $group<'_, C> {}

            impl<C: ?Sized> fmt::Debug for $group<'_, C> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($group))
                        .field("namespace", &$namespace)
                        .finish()
                }
            }

            impl<C: Caller + ?Sized> $group<'_, C> {
                $(
                    #[doc = concat!("`", $namespace, ".", $name, "`: POST `", $("/", $segment,)+ "`")]
                    pub async fn $method(&self, payload: Value) -> Result<Value> {
                        self.caller.call(&[$($segment),+], payload).await
                    }
                )*
            }
        )*

        /// Route-group accessors, available on every [`Caller`].
        pub trait RouteGroups: Caller {
            $(
                #[doc = concat!("Methods of the `", $namespace, "` namespace.")]
                fn $accessor(&self) -> $group<'_, Self> {
                    $group::new(self)
                }
            )*
        }

        impl<C: Caller + ?Sized> RouteGroups for C {}
    };
}

routes! {
    /// Server configuration: general settings, security, modules and rate limits.
    Config => config("config") {
        get("get") => ["rpc", "gdps", "config", "get"],
        update("update") => ["rpc", "gdps", "config", "update"],
        get_security("getSecurity") => ["rpc", "gdps", "config", "getSecurity"],
        update_security("updateSecurity") => ["rpc", "gdps", "config", "updateSecurity"],
        get_modules("getModules") => ["rpc", "gdps", "config", "getModules"],
        update_modules("updateModules") => ["rpc", "gdps", "config", "updateModules"],
        get_rates("getRates") => ["rpc", "gdps", "config", "getRates"],
        update_rates("updateRates") => ["rpc", "gdps", "config", "updateRates"],
        regenerate_secret("regenerateSecret") => ["rpc", "gdps", "config", "regenerateSecret"],
    }

    /// Usage analytics for a server.
    Analytics => analytics("analytics") {
        overview("overview") => ["rpc", "gdps", "analytics", "overview"],
        players("players") => ["rpc", "gdps", "analytics", "players"],
        levels("levels") => ["rpc", "gdps", "analytics", "levels"],
        requests("requests") => ["rpc", "gdps", "analytics", "requests"],
        downloads("downloads") => ["rpc", "gdps", "analytics", "downloads"],
    }

    /// Gauntlet management.
    Gauntlets => gauntlets("gauntlets") {
        list("list") => ["rpc", "gdps", "gauntlets", "list"],
        get("get") => ["rpc", "gdps", "gauntlets", "get"],
        create("create") => ["rpc", "gdps", "gauntlets", "create"],
        update("update") => ["rpc", "gdps", "gauntlets", "update"],
        delete("delete") => ["rpc", "gdps", "gauntlets", "delete"],
        set_levels("setLevels") => ["rpc", "gdps", "gauntlets", "setLevels"],
    }

    /// Level moderation and lookup.
    Levels => levels("levels") {
        list("list") => ["rpc", "gdps", "levels", "list"],
        get("get") => ["rpc", "gdps", "levels", "get"],
        search("search") => ["rpc", "gdps", "levels", "search"],
        update("update") => ["rpc", "gdps", "levels", "update"],
        delete("delete") => ["rpc", "gdps", "levels", "delete"],
        restore("restore") => ["rpc", "gdps", "levels", "restore"],
        rate("rate") => ["rpc", "gdps", "levels", "rate"],
        unrate("unrate") => ["rpc", "gdps", "levels", "unrate"],
        set_featured("setFeatured") => ["rpc", "gdps", "levels", "setFeatured"],
        set_epic("setEpic") => ["rpc", "gdps", "levels", "setEpic"],
        transfer_owner("transferOwner") => ["rpc", "gdps", "levels", "transferOwner"],
        list_reports("listReports") => ["rpc", "gdps", "levels", "listReports"],
        clear_reports("clearReports") => ["rpc", "gdps", "levels", "clearReports"],
    }

    /// Map pack management.
    MapPacks => map_packs("mapPacks") {
        list("list") => ["rpc", "gdps", "mapPacks", "list"],
        get("get") => ["rpc", "gdps", "mapPacks", "get"],
        create("create") => ["rpc", "gdps", "mapPacks", "create"],
        update("update") => ["rpc", "gdps", "mapPacks", "update"],
        delete("delete") => ["rpc", "gdps", "mapPacks", "delete"],
        set_levels("setLevels") => ["rpc", "gdps", "mapPacks", "setLevels"],
    }

    /// Freeform key/value metadata store attached to a server.
    Lab => lab("lab") {
        list("list") => ["rpc", "gdps", "lab", "list"],
        get("get") => ["rpc", "gdps", "lab", "get"],
        set("set") => ["rpc", "gdps", "lab", "set"],
        delete("delete") => ["rpc", "gdps", "lab", "delete"],
    }

    /// Custom music library.
    Music => music("music") {
        list("list") => ["rpc", "gdps", "music", "list"],
        get("get") => ["rpc", "gdps", "music", "get"],
        search("search") => ["rpc", "gdps", "music", "search"],
        add_from_url("addFromUrl") => ["rpc", "gdps", "music", "addFromUrl"],
        add_from_newgrounds("addFromNewgrounds") => ["rpc", "gdps", "music", "addFromNewgrounds"],
        update("update") => ["rpc", "gdps", "music", "update"],
        delete("delete") => ["rpc", "gdps", "music", "delete"],
        set_banned("setBanned") => ["rpc", "gdps", "music", "setBanned"],
    }

    /// Actions taken as a player: session, profile and song uploads.
    Player => player("player") {
        session_login("session.login") => ["rpc", "gdps", "player", "session", "login"],
        session_logout("session.logout") => ["rpc", "gdps", "player", "session", "logout"],
        session_get("session.get") => ["rpc", "gdps", "player", "session", "get"],
        profile_get("profile.get") => ["rpc", "gdps", "player", "profile", "get"],
        profile_update("profile.update") => ["rpc", "gdps", "player", "profile", "update"],
        songs_list("songs.list") => ["rpc", "gdps", "player", "songs", "list"],
        songs_upload("songs.upload") => ["rpc", "gdps", "player", "songs", "upload"],
        songs_delete("songs.delete") => ["rpc", "gdps", "player", "songs", "delete"],
    }

    /// Player roster administration.
    Players => players("players") {
        list("list") => ["rpc", "gdps", "players", "list"],
        get("get") => ["rpc", "gdps", "players", "get"],
        search("search") => ["rpc", "gdps", "players", "search"],
        ban("ban") => ["rpc", "gdps", "players", "ban"],
        unban("unban") => ["rpc", "gdps", "players", "unban"],
        set_roles("setRoles") => ["rpc", "gdps", "players", "setRoles"],
        reset_password("resetPassword") => ["rpc", "gdps", "players", "resetPassword"],
        rename("rename") => ["rpc", "gdps", "players", "rename"],
        activate("activate") => ["rpc", "gdps", "players", "activate"],
        delete("delete") => ["rpc", "gdps", "players", "delete"],
    }

    /// Public, unauthenticated server pages.
    Pages => pages("pages") {
        server("server") => ["rpc", "public", "pages", "server"],
        level("level") => ["rpc", "public", "pages", "level"],
        player("player") => ["rpc", "public", "pages", "player"],
        leaderboard("leaderboard") => ["rpc", "public", "pages", "leaderboard"],
        music("music") => ["rpc", "public", "pages", "music"],
    }

    /// Quest management.
    Quests => quests("quests") {
        list("list") => ["rpc", "gdps", "quests", "list"],
        create("create") => ["rpc", "gdps", "quests", "create"],
        update("update") => ["rpc", "gdps", "quests", "update"],
        delete("delete") => ["rpc", "gdps", "quests", "delete"],
        reorder("reorder") => ["rpc", "gdps", "quests", "reorder"],
    }

    /// Moderator roles and permissions.
    Roles => roles("roles") {
        list("list") => ["rpc", "gdps", "roles", "list"],
        get("get") => ["rpc", "gdps", "roles", "get"],
        create("create") => ["rpc", "gdps", "roles", "create"],
        update("update") => ["rpc", "gdps", "roles", "update"],
        delete("delete") => ["rpc", "gdps", "roles", "delete"],
        assign("assign") => ["rpc", "gdps", "roles", "assign"],
        revoke("revoke") => ["rpc", "gdps", "roles", "revoke"],
    }

    /// Servers owned by or shared with the account, their members and invites.
    Servers => servers("servers") {
        list("list") => ["rpc", "servers", "list"],
        get("get") => ["rpc", "servers", "get"],
        create("create") => ["rpc", "servers", "create"],
        update("update") => ["rpc", "servers", "update"],
        delete("delete") => ["rpc", "servers", "delete"],
        transfer("transfer") => ["rpc", "servers", "transfer"],
        members_list("members.list") => ["rpc", "servers", "members", "list"],
        members_remove("members.remove") => ["rpc", "servers", "members", "remove"],
        members_set_role("members.setRole") => ["rpc", "servers", "members", "setRole"],
        invites_list("invites.list") => ["rpc", "servers", "invites", "list"],
        invites_create("invites.create") => ["rpc", "servers", "invites", "create"],
        invites_revoke("invites.revoke") => ["rpc", "servers", "invites", "revoke"],
        invites_accept("invites.accept") => ["rpc", "servers", "invites", "accept"],
    }

    /// Account notifications.
    Notifications => notifications("notifications") {
        list("list") => ["rpc", "notifications", "list"],
        unread_count("unreadCount") => ["rpc", "notifications", "unreadCount"],
        mark_read("markRead") => ["rpc", "notifications", "markRead"],
        mark_all_read("markAllRead") => ["rpc", "notifications", "markAllRead"],
        delete("delete") => ["rpc", "notifications", "delete"],
    }

    /// The signed-in account and its sessions.
    User => user("user") {
        me("me") => ["rpc", "user", "me"],
        update("update") => ["rpc", "user", "update"],
        change_password("changePassword") => ["rpc", "user", "changePassword"],
        change_email("changeEmail") => ["rpc", "user", "changeEmail"],
        delete("delete") => ["rpc", "user", "delete"],
        logout("logout") => ["rpc", "user", "logout"],
        sessions_list("sessions.list") => ["rpc", "user", "sessions", "list"],
        sessions_revoke("sessions.revoke") => ["rpc", "user", "sessions", "revoke"],
        sessions_revoke_all("sessions.revokeAll") => ["rpc", "user", "sessions", "revokeAll"],
    }
}
