//! Integration tests for per-class header and source files

use crate::common;
use crate::fixtures;
use crate::{assert_generated_contains, assert_generated_not_contains};

use common::{file, generate_json};

#[test]
fn test_manager_header_layout() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    let header = file(&output, "headers/Managers/GameManager.h");

    let expected = "\
#ifndef __GAMEMANAGER_H__
#define __GAMEMANAGER_H__

#include \"../includes.h\"

/* -- Predefined Subclasses -- */

class GManager;

class GameManager : public GManager {
public:
    std::string m_playerName;
    /* PAD */
    int m_playerFrameRand;
    int m_playerFrameSeed;
    int m_playerFrame;
    static GameManager* sharedState();
    bool getGameVariable(char const* key);
    virtual void dataLoaded(DS_Dictionary* dict);
};

#endif /* __GAMEMANAGER_H__ */
";
    assert_eq!(header, expected);
}

#[test]
fn test_manager_source_layout() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    let source = file(&output, "src/Managers/GameManager.cpp");

    let expected = "\
#include \"includes.h\"


void GameManager::dataLoaded(DS_Dictionary* dict)
{
    return;
}

bool GameManager::getGameVariable(char const* key)
{
    return {};
}

GameManager* GameManager::sharedState()
{
    return {};
}

";
    assert_eq!(source, expected);
}

#[test]
fn test_layer_forward_declares_only_non_engine_bases() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    let header = file(&output, "headers/Layers/MenuLayer.h");

    assert_generated_contains!(
        header,
        "/* -- Predefined Subclasses -- */\n\nclass FLAlertLayerProtocol;\nclass GooglePlayDelegate;\n\n"
    );
    assert_generated_contains!(
        header,
        "class MenuLayer : public cocos2d::CCLayer, public FLAlertLayerProtocol, public GooglePlayDelegate {"
    );
    assert_generated_not_contains!(header, "class cocos2d::CCLayer;");
}

#[test]
fn test_unknown_return_is_never_a_definition() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    let source = file(&output, "src/Layers/MenuLayer.cpp");
    let header = file(&output, "headers/Layers/MenuLayer.h");

    assert_generated_contains!(
        source,
        "\n/* Unknown Return: MenuLayer::updateUserProfileButton() */\n"
    );
    assert_generated_not_contains!(source, "TodoReturn MenuLayer::updateUserProfileButton");
    assert_generated_contains!(header, "    /* Unknown Return: updateUserProfileButton(); */\n");
    assert_generated_not_contains!(header, "TodoReturn updateUserProfileButton");
}

#[test]
fn test_stub_order_is_sorted_by_name() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    let source = file(&output, "src/Layers/MenuLayer.cpp");

    let back = source.find("MenuLayer::keyBackClicked()").unwrap();
    let play = source.find("MenuLayer::onPlay(cocos2d::CCObject* sender)").unwrap();
    let unknown = source.find("MenuLayer::updateUserProfileButton()").unwrap();
    assert!(back < play && play < unknown);
}

#[test]
fn test_struct_member_and_const_function() {
    let output = generate_json(fixtures::GAME_BINDINGS);

    // member types are emitted as written, without the elaborated specifier
    let cell = file(&output, "headers/Cells/TableViewCell.h");
    assert_generated_contains!(cell, "    CCIndexPath m_parentIndexPath;\n");

    let node_header = file(&output, "headers/CustomCCClasses/CCTextInputNode.h");
    assert_generated_contains!(node_header, "    std::string getString() const;\n");
    assert_generated_contains!(node_header, "    void setString(std::string str);\n");

    let node_source = file(&output, "src/CustomCCClasses/CCTextInputNode.cpp");
    assert_generated_contains!(
        node_source,
        "std::string CCTextInputNode::getString() const\n{\n    return {};\n}\n"
    );
}

#[test]
fn test_domain_namespace_never_survives() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    for generated in &output.files {
        if generated.path.ends_with("includes.h") {
            continue;
        }
        assert_generated_not_contains!(generated.contents, "gd::");
    }
}

#[test]
fn test_partial_seed_value() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    let header = file(&output, "headers/Common/GJGameLevel.h");
    assert_generated_contains!(header, "    int m_attemptsRand;\n    int m_attemptsSeed;\n");
    assert_generated_not_contains!(header, "int m_attempts;");
    assert_generated_not_contains!(header, "SeedValue");
}

#[test]
fn test_every_file_ends_with_newline() {
    let output = generate_json(fixtures::GAME_BINDINGS);
    for generated in &output.files {
        assert!(
            generated.contents.ends_with('\n'),
            "{} does not end with a newline",
            generated.path
        );
    }
}

#[test]
fn test_reference_returning_stubs_bind_a_static() {
    let output = generate_json(
        r#"{ "classes": [ { "name": "GJGameLevel", "fields": [
            { "kind": "functionBind", "prototype": { "name": "getCount", "ret": { "name": "int&" } } },
            { "kind": "functionBind", "prototype": { "name": "getName", "ret": { "name": "gd::string const&" }, "isConst": true } }
        ] } ] }"#,
    );
    let source = file(&output, "src/Common/GJGameLevel.cpp");

    assert_generated_contains!(
        source,
        "int& GJGameLevel::getCount()\n{\n    static int placeholder{};\n    return placeholder;\n}\n"
    );
    assert_generated_contains!(
        source,
        "std::string const& GJGameLevel::getName() const\n{\n    static std::string const placeholder{};\n    return placeholder;\n}\n"
    );
    assert_generated_not_contains!(source, "return {};");
}
