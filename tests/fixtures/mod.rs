/// Fixture: binding trees in the JSON form the bindings parser produces

/// A small but representative slice of the game: one class per output
/// directory, an engine class, a delegate and a legacy-library class
pub const GAME_BINDINGS: &str = r#"{
  "classes": [
    {
      "name": "cocos2d::CCNode",
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "init", "ret": { "name": "bool" }, "isVirtual": true } }
      ]
    },
    {
      "name": "GameManager",
      "superclasses": ["GManager"],
      "fields": [
        { "kind": "member", "name": "m_playerName", "type": { "name": "gd::string" } },
        { "kind": "pad" },
        { "kind": "member", "name": "m_playerFrame", "type": { "name": "geode::SeedValueRSV" } },
        { "kind": "functionBind", "prototype": { "name": "sharedState", "ret": { "name": "GameManager*" }, "isStatic": true } },
        { "kind": "functionBind", "prototype": {
            "name": "getGameVariable", "ret": { "name": "bool" },
            "args": [ { "name": "key", "type": { "name": "char const*" } } ] } },
        { "kind": "functionBind", "prototype": { "name": "dataLoaded", "ret": { "name": "void" },
            "args": [ { "name": "dict", "type": { "name": "DS_Dictionary*" } } ], "isVirtual": true } }
      ]
    },
    {
      "name": "TextInputDelegate",
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "textChanged", "ret": { "name": "void" },
            "args": [ { "name": "input", "type": { "name": "CCTextInputNode*" } } ], "isVirtual": true } },
        { "kind": "functionBind", "prototype": { "name": "allowTextInput", "ret": { "name": "bool" },
            "args": [ { "name": "input", "type": { "name": "CCTextInputNode*" } } ], "isVirtual": true } }
      ]
    },
    {
      "name": "MenuLayer",
      "superclasses": ["cocos2d::CCLayer", "FLAlertLayerProtocol", "GooglePlayDelegate"],
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "onPlay", "ret": { "name": "void" },
            "args": [ { "name": "sender", "type": { "name": "cocos2d::CCObject*" } } ] } },
        { "kind": "functionBind", "prototype": { "name": "keyBackClicked", "ret": { "name": "void" }, "isVirtual": true } },
        { "kind": "functionBind", "prototype": { "name": "updateUserProfileButton", "ret": { "name": "TodoReturn" } } }
      ]
    },
    {
      "name": "TableViewCell",
      "fields": [
        { "kind": "member", "name": "m_parentIndexPath", "type": { "name": "CCIndexPath", "isStruct": true } }
      ]
    },
    {
      "name": "CCTextInputNode",
      "superclasses": ["cocos2d::CCLayer"],
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "getString", "ret": { "name": "gd::string" }, "isConst": true } },
        { "kind": "functionBind", "prototype": { "name": "setString", "ret": { "name": "void" },
            "args": [ { "name": "str", "type": { "name": "gd::string" } } ] } }
      ]
    },
    {
      "name": "LevelTools",
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "getAudioTitle", "ret": { "name": "gd::string" },
            "args": [ { "name": "id", "type": { "name": "int" } } ], "isStatic": true } }
      ]
    },
    {
      "name": "GJGameLevel",
      "superclasses": ["cocos2d::CCNode"],
      "fields": [
        { "kind": "member", "name": "m_levelName", "type": { "name": "gd::string" } },
        { "kind": "member", "name": "m_attempts", "type": { "name": "geode::SeedValueRS" } },
        { "kind": "functionBind", "prototype": { "name": "create", "ret": { "name": "GJGameLevel*" }, "isStatic": true } },
        { "kind": "functionBind", "prototype": { "name": "getCoinKey", "ret": { "name": "char const*" },
            "args": [ { "name": "coin", "type": { "name": "int" } } ] } }
      ]
    },
    {
      "name": "AchievementManager",
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "sharedState", "ret": { "name": "AchievementManager*" }, "isStatic": true } }
      ]
    },
    {
      "name": "pugi::xml_document",
      "fields": [
        { "kind": "functionBind", "prototype": { "name": "load_string", "ret": { "name": "bool" },
            "args": [ { "name": "contents", "type": { "name": "char const*" } } ] } }
      ]
    },
    { "name": "DS_Dictionary" }
  ]
}"#;

/// Classes that all route to the same directory, in a deliberate
/// non-alphabetical order
pub const SAME_DIRECTORY: &str = r#"{
  "classes": [
    { "name": "PlayLayer" },
    { "name": "EditLevelLayer" },
    { "name": "CreatorLayer" },
    { "name": "LevelInfoLayer" }
  ]
}"#;

/// A tree with only suppressed classes
pub const ONLY_SUPPRESSED: &str = r#"{
  "classes": [
    { "name": "cocos2d::CCSprite" },
    { "name": "LevelSettingsDelegate" },
    { "name": "DS_Dictionary" }
  ]
}"#;
